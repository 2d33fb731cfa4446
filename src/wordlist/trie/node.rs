use std::fmt::{Debug, Formatter};

use crate::alphabet::{get_idx, ALPHABET_SIZE};

#[derive(Default)]
pub(crate) struct TrieNode {
    pub(crate) children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    pub(crate) is_terminal: bool,
    /// Number of stored words whose path enters this node. Unused on the root.
    pub(crate) pass_count: usize,
}

impl TrieNode {
    pub(crate) fn get_child(&self, letter: u8) -> Option<&TrieNode> {
        self.children[get_idx(letter)].as_deref()
    }

    pub(crate) fn get_child_mut(&mut self, letter: u8) -> Option<&mut TrieNode> {
        self.children[get_idx(letter)].as_deref_mut()
    }

    pub(crate) fn get_or_create_child(&mut self, letter: u8) -> &mut TrieNode {
        self.children[get_idx(letter)].get_or_insert_with(Default::default)
    }

    pub(crate) fn unlink_child(&mut self, letter: u8) {
        self.children[get_idx(letter)] = None;
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// A non-root node in this state carries no information and has to be pruned.
    pub(crate) fn is_useless(&self) -> bool {
        !self.is_terminal && self.is_leaf()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("pass_count", &self.pass_count)
            .field("children", &self.iter().map(|(c, _)| c).collect::<String>())
            .finish()
    }
}
