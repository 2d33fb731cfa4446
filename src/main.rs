use std::io;
use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;
use tracing::Level;
use word_trie::console::Console;
use word_trie::wordlist::wordlist::{FileFormat, Wordlist};

/// Interactive prefix tree over words made of the letters a-z.
#[derive(StructOpt)]
#[structopt(name = "word-trie")]
struct Cli {
    /// Word list to load before the prompt opens
    #[structopt(short, long, parse(from_os_str))]
    load: Option<PathBuf>,
    /// Column delimiter of the word list; whole lines are words without one
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Column holding the word when a delimiter is set
    #[structopt(long)]
    word_column: Option<usize>,
    /// Only log errors
    #[structopt(short, long)]
    quiet: bool,
    /// Log more (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::from_args();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .build();

    let mut wordlist = Wordlist::new();
    if let Some(path) = &args.load {
        let report = wordlist.load_file(path, &format)
            .with_context(|| format!("loading {}", path.display()))?;
        println!("Loaded {} words ({} lines skipped)", report.added, report.skipped.len());
    }

    let stdin = io::stdin();
    let mut console = Console::new(wordlist, format, stdin.lock(), io::stdout());
    console.run()?;
    Ok(())
}
