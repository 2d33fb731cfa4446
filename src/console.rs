use std::io::{self, BufRead, Write};

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{alpha1, digit1, space0, space1};
use nom::combinator::{map, opt, rest};
use nom::sequence::{pair, preceded};
use nom::IResult;
use tracing::debug;

use crate::error::InvalidInputError;
use crate::wordlist::wordlist::{FileFormat, Wordlist};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Verb {
    Quit,
    Insert,
    Contains,
    StartsWith,
    Words,
    Count,
    Size,
    Remove,
    List,
    Load,
    Save,
    Dot,
    Help,
}

impl Verb {
    fn from_name(name: &str) -> Option<Verb> {
        Some(match name.to_ascii_lowercase().as_str() {
            "0" | "quit" | "exit" => Verb::Quit,
            "1" | "insert" | "add" => Verb::Insert,
            "2" | "contains" | "has" => Verb::Contains,
            "3" | "prefix" | "startswith" => Verb::StartsWith,
            "4" | "words" | "find" => Verb::Words,
            "5" | "count" => Verb::Count,
            "6" | "size" => Verb::Size,
            "7" | "remove" | "delete" => Verb::Remove,
            "8" | "list" | "all" => Verb::List,
            "9" | "load" => Verb::Load,
            "10" | "save" => Verb::Save,
            "11" | "dot" => Verb::Dot,
            "help" | "menu" | "?" => Verb::Help,
            _ => return None,
        })
    }

    /// What to ask for when the command line didn't carry the argument.
    fn argument_prompt(&self) -> Option<&'static str> {
        match self {
            Verb::Insert => Some("Word to insert: "),
            Verb::Contains => Some("Word to look up: "),
            Verb::StartsWith => Some("Prefix: "),
            Verb::Words => Some("Prefix to list words for: "),
            Verb::Count => Some("Prefix to count words for: "),
            Verb::Remove => Some("Word to remove: "),
            Verb::Load => Some("File to load words from: "),
            Verb::Save => Some("File to save words to: "),
            Verb::Dot => Some("File to save the DOT description to: "),
            Verb::Quit | Verb::Size | Verb::List | Verb::Help => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Command {
    pub verb: Verb,
    pub argument: Option<String>,
}

fn verb(input: &str) -> IResult<&str, &str> {
    alt((alpha1, digit1, tag("?")))(input)
}

fn argument(input: &str) -> IResult<&str, Option<&str>> {
    map(opt(preceded(space1, rest)), |x: Option<&str>| {
        x.map(str::trim).filter(|x| !x.is_empty())
    })(input)
}

fn command_line(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    preceded(space0, pair(verb, argument))(input)
}

/// Parses `<verb> [argument]`. Returns `None` for blank lines, unknown verbs
/// and arguments given to verbs that take none.
pub fn parse_command(line: &str) -> Option<Command> {
    let (remaining, (name, argument)) = command_line(line).ok()?;
    if !remaining.trim().is_empty() {
        return None;
    }
    let verb = Verb::from_name(name)?;
    if argument.is_some() && verb.argument_prompt().is_none() {
        return None;
    }
    Some(Command {
        verb,
        argument: argument.map(str::to_string),
    })
}

pub const MENU: &str = "\
Menu:
1  - insert <word>       add a word
2  - contains <word>     check whether a word is stored
3  - prefix <prefix>     check whether any word starts with a prefix
4  - words <prefix>      list the words starting with a prefix
5  - count <prefix>      count the words starting with a prefix
6  - size                number of stored words
7  - remove <word>       delete a word
8  - list                print every word
9  - load <file>         load words from a file
10 - save <file>         save every word to a file
11 - dot <file>          save the DOT description to a file
0  - quit
";

/// Interactive loop over a word list. Reads commands from `input` and writes
/// everything, prompts included, to `output`.
pub struct Console<R, W> {
    wordlist: Wordlist,
    format: FileFormat,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(wordlist: Wordlist, format: FileFormat, input: R, output: W) -> Self {
        Console { wordlist, format, input, output }
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    pub fn into_wordlist(self) -> Wordlist {
        self.wordlist
    }

    /// Runs until `quit` or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        write!(self.output, "{}", MENU)?;
        loop {
            let line = match self.prompt("\n> ")? {
                None => break,
                Some(line) => line,
            };
            if line.trim().is_empty() {
                continue;
            }
            let command = match parse_command(&line) {
                None => {
                    writeln!(self.output, "Unknown command. Type `help` for the menu.")?;
                    continue;
                }
                Some(command) => command,
            };
            debug!(?command, "running");
            if command.verb == Verb::Quit {
                writeln!(self.output, "Bye.")?;
                break;
            }
            self.execute(command)?;
        }
        self.output.flush()
    }

    /// Shows `text` and reads one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        let argument = match (command.argument, command.verb.argument_prompt()) {
            (Some(argument), _) => argument,
            (None, Some(text)) => match self.prompt(text)? {
                Some(argument) => argument,
                None => return self.report_error(InvalidInputError::Missing),
            },
            (None, None) => String::new(),
        };

        match self.respond(command.verb, &argument) {
            Ok(text) => write!(self.output, "{}", text),
            Err(error) => self.report_error(error),
        }
    }

    /// Runs one command against the word list and renders what to show for it.
    fn respond(&mut self, verb: Verb, argument: &str) -> anyhow::Result<String> {
        let wl = &mut self.wordlist;
        Ok(match verb {
            Verb::Insert => if wl.insert(argument)? {
                "Word added.\n".to_string()
            } else {
                "Word is already stored.\n".to_string()
            },
            Verb::Contains => if wl.contains(argument)? {
                "Word is stored.\n".to_string()
            } else {
                "Word is not stored.\n".to_string()
            },
            Verb::StartsWith => if wl.starts_with(argument)? {
                "Words with this prefix exist.\n".to_string()
            } else {
                "No words with this prefix.\n".to_string()
            },
            Verb::Words => {
                let words = wl.get_by_prefix(argument)?;
                if words.is_empty() {
                    "No words with this prefix.\n".to_string()
                } else {
                    words.iter().fold(format!("Words with this prefix ({}):\n", words.len()), |mut out, word| {
                        out.push_str(word);
                        out.push('\n');
                        out
                    })
                }
            }
            Verb::Count => format!("Words with this prefix: {}\n", wl.count_by_prefix(argument)?),
            Verb::Size => format!("Words stored: {}\n", wl.len()),
            Verb::Remove => if wl.remove(argument)? {
                "Word removed.\n".to_string()
            } else {
                "Word was not stored.\n".to_string()
            },
            Verb::List => if wl.is_empty() {
                "The trie holds no words.\n".to_string()
            } else {
                format!("All words:\n{}", wl.to_word_listing())
            },
            Verb::Load => {
                let report = wl.load_file(argument.trim(), &self.format)?;
                let mut out = String::new();
                for skipped in &report.skipped {
                    out.push_str(&format!("Line {} ({:?}) skipped: {}\n", skipped.line_number, skipped.text, skipped.error));
                }
                out.push_str(&format!("Words loaded: {} ({} already stored)\n", report.added, report.duplicates));
                out
            }
            Verb::Save => {
                wl.save_file(argument.trim())?;
                "Words saved.\n".to_string()
            }
            Verb::Dot => {
                wl.save_dot(argument.trim())?;
                "DOT description saved.\n".to_string()
            }
            Verb::Help => MENU.to_string(),
            Verb::Quit => String::new(),
        })
    }

    fn report_error<E: std::fmt::Display>(&mut self, error: E) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error)
    }
}
