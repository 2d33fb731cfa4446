pub mod alphabet;
pub mod console;
pub mod error;
pub mod wordlist;

pub use error::{InvalidInputError, WordlistError};
pub use wordlist::trie::Trie;
pub use wordlist::wordlist::{FileFormat, LoadReport, Wordlist};
