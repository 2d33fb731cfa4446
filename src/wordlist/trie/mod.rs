pub mod trie;

mod node;
mod iterators;
mod search;
mod export;

pub use trie::Trie;
