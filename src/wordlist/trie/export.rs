use std::fmt::{Debug, Display, Formatter};

use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    /// All stored words in alphabetical order, each followed by a newline.
    /// Empty when the trie is.
    pub fn to_word_listing(&self) -> String {
        let mut words = Vec::with_capacity(self.len());
        self.root.collect_words("", &mut words);
        words.iter().fold(String::new(), |mut out, word| {
            out.push_str(word);
            out.push('\n');
            out
        })
    }

    /// Graphviz description of the tree's shape: one declaration per node,
    /// labelled `root`, `word` or `node`, and one edge per letter.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph Trie {\n  node [shape=circle];\n");
        let mut next_id = 0;
        self.root.write_dot(0, &mut next_id, &mut out);
        out.push_str("}\n");
        out
    }
}

impl TrieNode {
    fn write_dot(&self, id: usize, next_id: &mut usize, out: &mut String) {
        let label = match (id, self.is_terminal) {
            (0, _) => "root",
            (_, true) => "word",
            (_, false) => "node",
        };
        out.push_str(&format!("  n{} [label=\"{}\"];\n", id, label));
        for (letter, child) in self {
            *next_id += 1;
            let child_id = *next_id;
            out.push_str(&format!("  n{} -> n{} [label=\"{}\"];\n", id, child_id, letter));
            child.write_dot(child_id, next_id, out);
        }
    }
}

impl Display for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return writeln!(f, "(empty)");
        }
        f.write_str(&self.to_word_listing())
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![(String::new(), &self.root)];
        while let Some((path, node)) = stack.pop() {
            l.entry(&format_args!("{:?} {:?}", path, node));
            // Reversed so the pop order stays alphabetical.
            let mut children: Vec<_> = node.iter().collect();
            children.reverse();
            stack.extend(children.into_iter().map(|(c, child)| (format!("{}{}", path, c), child)));
        }
        l.finish()
    }
}
