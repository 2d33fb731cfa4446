use tracing::{debug, trace};

use crate::alphabet::normalize;
use crate::error::InvalidInputError;
use crate::wordlist::trie::node::TrieNode;

/// Prefix tree over lowercase `a..=z` words.
///
/// Every operation taking a word or prefix normalizes it first (see
/// [`normalize`](crate::alphabet::normalize)) and fails before mutating anything
/// if it is invalid.
#[derive(Default)]
pub struct Trie {
    pub(crate) root: TrieNode,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
            len: 0,
        }
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `word`. Returns `false` and leaves the trie as it was if the word
    /// is already stored.
    pub fn insert(&mut self, word: &str) -> Result<bool, InvalidInputError> {
        let word = normalize(word)?;
        if self.get_node(&word).map_or(false, |x| x.is_terminal) {
            debug!(word = %word, "already stored");
            return Ok(false);
        }

        let mut current = &mut self.root;
        for c in word.bytes() {
            current = current.get_or_create_child(c);
            current.pass_count += 1;
        }
        current.is_terminal = true;
        self.len += 1;
        debug!(word = %word, len = self.len, "inserted");
        Ok(true)
    }

    /// Inserts every word in order, stopping at the first invalid one.
    /// Returns how many words were new.
    pub fn add_all<'w, I>(&mut self, words: I) -> Result<usize, InvalidInputError>
        where I: IntoIterator<Item=&'w str> {
        let mut added = 0;
        for word in words {
            if self.insert(word)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Deletes `word`, pruning every node left without children or a word of
    /// its own. Returns `false` without touching the trie if it wasn't stored.
    pub fn remove(&mut self, word: &str) -> Result<bool, InvalidInputError> {
        let word = normalize(word)?;
        if !self.get_node(&word).map_or(false, |x| x.is_terminal) {
            debug!(word = %word, "not stored, nothing to remove");
            return Ok(false);
        }

        // The root answers for the empty prefix and is never pruned.
        Self::remove_below(&mut self.root, word.as_bytes());
        self.len -= 1;
        debug!(word = %word, len = self.len, "removed");
        Ok(true)
    }

    /// Removes `rest` below `node`, which must lie on a stored word's path.
    /// Returns whether `node` itself should now be unlinked from its parent.
    fn remove_below(node: &mut TrieNode, rest: &[u8]) -> bool {
        match rest.split_first() {
            None => node.is_terminal = false,
            Some((&c, tail)) => {
                let unlink = match node.get_child_mut(c) {
                    Some(child) => {
                        child.pass_count -= 1;
                        Self::remove_below(child, tail)
                    }
                    None => false,
                };
                if unlink {
                    trace!(letter = %(c as char), depth = rest.len(), "pruning node");
                    node.unlink_child(c);
                }
            }
        }
        node.is_useless()
    }
}
