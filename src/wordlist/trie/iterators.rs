use crate::alphabet::{letter_at, ALPHABET_SIZE};
use crate::wordlist::trie::node::TrieNode;

/// Walks the present children of a node in alphabetical order, yielding each
/// edge letter with its child.
#[derive(Debug)]
pub(crate) struct TrieCursor<'a> {
    idx: usize,
    node: &'a TrieNode,
}

impl<'a> Iterator for TrieCursor<'a> {
    type Item = (char, &'a TrieNode);

    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < ALPHABET_SIZE {
            let idx = self.idx;
            self.idx += 1;
            if let Some(child) = self.node.children[idx].as_deref() {
                return Some((letter_at(idx), child));
            }
        }
        None
    }
}

impl TrieNode {
    pub(crate) fn iter(&self) -> TrieCursor<'_> {
        TrieCursor { idx: 0, node: self }
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = (char, &'a TrieNode);
    type IntoIter = TrieCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
