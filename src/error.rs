use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A word or prefix that cannot be stored in the trie.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("no word or prefix was given")]
    Missing,
    #[error("word or prefix must not be empty")]
    Empty,
    #[error("only letters a-z are allowed, found '{0}'")]
    InvalidCharacter(char),
}

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
