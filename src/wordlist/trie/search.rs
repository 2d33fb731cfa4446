use crate::alphabet::normalize;
use crate::error::InvalidInputError;
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    pub fn contains(&self, word: &str) -> Result<bool, InvalidInputError> {
        let word = normalize(word)?;
        Ok(self.get_node(&word).map_or(false, |x| x.is_terminal))
    }

    /// Whether any stored word begins with `prefix` (including `prefix` itself).
    pub fn starts_with(&self, prefix: &str) -> Result<bool, InvalidInputError> {
        let prefix = normalize(prefix)?;
        Ok(self.get_node(&prefix).is_some())
    }

    pub fn count_by_prefix(&self, prefix: &str) -> Result<usize, InvalidInputError> {
        let prefix = normalize(prefix)?;
        Ok(self.get_node(&prefix).map_or(0, |x| x.pass_count))
    }

    /// Every stored word beginning with `prefix`, in alphabetical order.
    pub fn get_by_prefix(&self, prefix: &str) -> Result<Vec<String>, InvalidInputError> {
        let prefix = normalize(prefix)?;
        let node = match self.get_node(&prefix) {
            None => return Ok(vec![]),
            Some(node) => node,
        };

        let mut results = Vec::with_capacity(node.pass_count);
        node.collect_words(&prefix, &mut results);
        debug_assert_eq!(results.len(), node.pass_count);
        Ok(results)
    }

    /// Node reached by following an already normalized `path` from the root.
    pub(crate) fn get_node(&self, path: &str) -> Option<&TrieNode> {
        path.bytes().try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl TrieNode {
    /// Pushes every word ending in this subtree onto `results`, depth first and
    /// alphabetically. `path` is the string this node represents.
    pub(crate) fn collect_words(&self, path: &str, results: &mut Vec<String>) {
        if self.is_terminal {
            results.push(path.to_string());
        }
        for (letter, child) in self {
            child.collect_words(&format!("{}{}", path, letter), results);
        }
    }
}

#[cfg(test)]
mod tests {
    use maplit::btreeset;
    use std::collections::BTreeSet;

    use crate::error::InvalidInputError;
    use crate::wordlist::trie::Trie;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        trie.add_all(words.iter().copied()).unwrap();
        trie
    }

    #[test]
    fn prefix_test_ignores_terminal_flag() {
        let trie = trie_of(&["hello", "help"]);
        assert!(trie.starts_with("h").unwrap());
        assert!(trie.starts_with("hel").unwrap());
        assert!(trie.starts_with("hello").unwrap());
        assert!(!trie.starts_with("hellos").unwrap());
        assert!(!trie.starts_with("x").unwrap());
    }

    #[test]
    fn counts_words_by_prefix() {
        let trie = trie_of(&["hello", "help", "goodbye", "good", "go"]);
        assert_eq!(trie.count_by_prefix("h").unwrap(), 2);
        assert_eq!(trie.count_by_prefix("go").unwrap(), 3);
        assert_eq!(trie.count_by_prefix("good").unwrap(), 2);
        assert_eq!(trie.count_by_prefix("goodbye").unwrap(), 1);
        assert_eq!(trie.count_by_prefix("goodbyes").unwrap(), 0);
        assert_eq!(trie.count_by_prefix("z").unwrap(), 0);
    }

    #[test]
    fn lists_words_by_prefix() {
        let trie = trie_of(&["hello", "help", "goodbye", "good", "go"]);
        assert_eq!(trie.get_by_prefix("go").unwrap(), vec!["go", "good", "goodbye"]);
        assert_eq!(trie.get_by_prefix("HEL").unwrap(), vec!["hello", "help"]);
        assert_eq!(trie.get_by_prefix("help").unwrap(), vec!["help"]);
        assert!(trie.get_by_prefix("q").unwrap().is_empty());
        assert!(trie.get_by_prefix("helps").unwrap().is_empty());
    }

    #[test]
    fn listed_words_match_the_count() {
        let trie = trie_of(&["cat", "car", "cart", "care", "dog"]);
        let words: BTreeSet<String> = trie.get_by_prefix("ca").unwrap().into_iter().collect();
        assert_eq!(words, btreeset! {
            "car".to_string(), "care".to_string(), "cart".to_string(), "cat".to_string()
        });
        assert_eq!(words.len(), trie.count_by_prefix("ca").unwrap());
    }

    #[test]
    fn queries_reject_invalid_prefixes() {
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.starts_with(""), Err(InvalidInputError::Empty));
        assert_eq!(trie.count_by_prefix("c_"), Err(InvalidInputError::InvalidCharacter('_')));
        assert_eq!(trie.get_by_prefix("9"), Err(InvalidInputError::InvalidCharacter('9')));
    }
}
