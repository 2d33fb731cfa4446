use std::fs;
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use derive_new::new;
use metrics::{counter, gauge};
use tracing::{info, warn};
use typed_builder::TypedBuilder;

use crate::alphabet::normalize_opt;
use crate::error::{InvalidInputError, WordlistError};
use crate::wordlist::trie::Trie;

/// A trie together with the plain-text files it is loaded from and saved to.
#[derive(Default, Debug)]
pub struct Wordlist {
    trie: Trie,
}

/// How to find the word on each line of a word list. By default the whole
/// line is the word.
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq)]
pub struct FileFormat {
    #[builder(default, setter(into))]
    delimiter: Option<char>,
    #[builder(default, setter(into))]
    word_column: Option<usize>,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    /// The word column of `line`, or `None` if the line doesn't have one.
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub text: String,
    pub error: InvalidInputError,
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub added: usize,
    pub duplicates: usize,
    pub skipped: Vec<SkippedLine>,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Default::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<(Wordlist, LoadReport), WordlistError> {
        let mut wordlist = Wordlist::new();
        let report = wordlist.load_file(path, format)?;
        Ok((wordlist, report))
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str) -> Result<bool, InvalidInputError>;
            pub fn remove(&mut self, word: &str) -> Result<bool, InvalidInputError>;
            pub fn contains(&self, word: &str) -> Result<bool, InvalidInputError>;
            pub fn starts_with(&self, prefix: &str) -> Result<bool, InvalidInputError>;
            pub fn count_by_prefix(&self, prefix: &str) -> Result<usize, InvalidInputError>;
            pub fn get_by_prefix(&self, prefix: &str) -> Result<Vec<String>, InvalidInputError>;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn to_word_listing(&self) -> String;
            pub fn to_dot(&self) -> String;
        }
    }

    /// Adds every word in the file at `path`. Blank lines are ignored and
    /// invalid ones are reported in the returned [`LoadReport`]. If the file
    /// can't be read nothing is added.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<LoadReport, WordlistError> {
        let path = path.as_ref();
        info!("Reading words from {}", path.display());

        let start = Instant::now();
        let contents = fs::read(path).map_err(|source| WordlistError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut report = LoadReport::default();
        // Decoded per line; invalid UTF-8 becomes U+FFFD, which normalization rejects.
        for (idx, raw) in contents.split(|&b| b == b'\n').enumerate() {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let decoded = String::from_utf8_lossy(raw);
            let line: &str = &decoded;
            if line.trim().is_empty() {
                continue;
            }
            let inserted = normalize_opt(format.parse_line(line))
                .and_then(|word| self.trie.insert(&word));
            match inserted {
                Ok(true) => report.added += 1,
                Ok(false) => report.duplicates += 1,
                Err(error) => {
                    warn!("Line #{} ({:?}) skipped: {}", idx + 1, line, error);
                    report.skipped.push(SkippedLine::new(idx + 1, line.to_string(), error));
                }
            }
        }

        info!("Read {} new words from {} in {:.3}s [{} duplicates, {} skipped]",
              report.added, path.display(), start.elapsed().as_secs_f64(),
              report.duplicates, report.skipped.len());
        counter!("wordlist_words_added", report.added as u64);
        counter!("wordlist_lines_skipped", report.skipped.len() as u64);
        gauge!("wordlist_size", self.len() as f64);
        Ok(report)
    }

    /// Writes the word listing, one word per line.
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WordlistError> {
        Self::write_file(path.as_ref(), &self.trie.to_word_listing())?;
        info!("Saved {} words to {}", self.len(), path.as_ref().display());
        Ok(())
    }

    pub fn save_dot<P: AsRef<Path>>(&self, path: P) -> Result<(), WordlistError> {
        Self::write_file(path.as_ref(), &self.trie.to_dot())?;
        info!("Saved DOT description to {}", path.as_ref().display());
        Ok(())
    }

    fn write_file(path: &Path, contents: &str) -> Result<(), WordlistError> {
        fs::write(path, contents).map_err(|source| WordlistError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use crate::error::{InvalidInputError, WordlistError};
    use crate::wordlist::wordlist::{FileFormat, SkippedLine, Wordlist};

    fn temp_file<C: AsRef<[u8]>>(name: &str, contents: C) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("word-trie-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_one_word_per_line() {
        let path = temp_file("plain.txt", "cat\n\nCar\n  dog  \n\ncat\n");
        let (wl, report) = Wordlist::from_file(&path, &FileFormat::default()).unwrap();
        assert_eq!(report.added, 3);
        assert_eq!(report.duplicates, 1);
        assert!(report.skipped.is_empty());
        assert_eq!(wl.to_word_listing(), "car\ncat\ndog\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn skips_and_reports_invalid_lines() {
        let path = temp_file("invalid.txt", "cat\nc4t\n   \nice cream\ndog\n");
        let (wl, report) = Wordlist::from_file(&path, &FileFormat::default()).unwrap();
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, vec![
            SkippedLine::new(2, "c4t".to_string(), InvalidInputError::InvalidCharacter('4')),
            SkippedLine::new(4, "ice cream".to_string(), InvalidInputError::InvalidCharacter(' ')),
        ]);
        assert_eq!(wl.len(), 2);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn skips_lines_that_are_not_utf8() {
        let path = temp_file("latin1.txt", b"cat\ncaf\xe9\r\ndog\r\n");
        let (wl, report) = Wordlist::from_file(&path, &FileFormat::default()).unwrap();
        assert_eq!(wl.to_word_listing(), "cat\ndog\n");
        assert_eq!(report.added, 2);
        assert_eq!(report.skipped, vec![
            SkippedLine::new(2, "caf\u{fffd}".to_string(), InvalidInputError::InvalidCharacter('\u{fffd}')),
        ]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn reads_the_word_column_of_delimited_files() {
        let path = temp_file("columns.tsv", "1\tapple\n2\tBanana\n3\n4\t\n");
        let format = FileFormat::builder().delimiter('\t').word_column(1usize).build();
        let (wl, report) = Wordlist::from_file(&path, &format).unwrap();
        assert_eq!(wl.get_by_prefix("a").unwrap(), vec!["apple"]);
        assert!(wl.contains("banana").unwrap());
        assert_eq!(report.skipped.iter().map(|x| x.error.clone()).collect::<Vec<_>>(),
                   vec![InvalidInputError::Missing, InvalidInputError::Empty]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn unreadable_file_changes_nothing() {
        let mut wl = Wordlist::new();
        wl.insert("cat").unwrap();
        let mut missing = std::env::temp_dir();
        missing.push("word-trie-definitely-missing/words.txt");
        let err = wl.load_file(&missing, &FileFormat::default()).unwrap_err();
        assert!(matches!(err, WordlistError::Read { .. }));
        assert_eq!(wl.to_word_listing(), "cat\n");
    }

    #[test]
    fn saved_listing_loads_back() {
        let mut wl = Wordlist::new();
        for word in ["hello", "help", "good", "goodbye"] {
            wl.insert(word).unwrap();
        }
        let path = temp_file("saved.txt", "");
        wl.save_file(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), wl.to_word_listing());

        let (copy, report) = Wordlist::from_file(&path, &FileFormat::default()).unwrap();
        assert_eq!(report.added, 4);
        assert_eq!(copy.to_word_listing(), wl.to_word_listing());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn saves_dot_description() {
        let mut wl = Wordlist::new();
        wl.insert("hi").unwrap();
        let path = temp_file("trie.dot", "");
        wl.save_dot(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), wl.to_dot());
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn write_failures_are_reported() {
        let wl = Wordlist::new();
        let mut dir = std::env::temp_dir();
        dir.push("word-trie-definitely-missing/out.txt");
        assert!(matches!(wl.save_file(&dir), Err(WordlistError::Write { .. })));
    }
}
