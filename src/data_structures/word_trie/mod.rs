// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! This module provides a prefix tree over a dynamic vocabulary with
//! membership tests, soft deletion and prefix completion.
//!
//! Deletion only clears a node's terminal flag. Nodes are never freed once
//! created, so a removed word's path stays available as a prefix of other
//! words and the node count never shrinks.
//!
//! # Example
//!
//! ```
//! use huaolelo_lib::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.insert("app").unwrap();
//! trie.insert("apple").unwrap();
//! trie.insert("apply").unwrap();
//!
//! assert!(trie.contains("apple"));
//! assert_eq!(trie.postfixes("app"), vec!["", "le", "ly"]);
//! assert_eq!(trie.complete("app"), vec!["app", "apple", "apply"]);
//! ```

mod error;
mod node;

use std::fmt;

pub use error::WordTrieError;
pub use node::TrieNode;

/// Result type for word trie operations
pub type WordTrieResult<T> = Result<T, WordTrieError>;

/// Configuration options for the word trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordTrieConfig {
    /// Maximum word length in characters (`None` for unbounded)
    pub max_word_length: Option<usize>,
}

impl WordTrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit stored words to `max_word_length` characters.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = Some(max_word_length);
        self
    }
}

/// A prefix tree of words.
///
/// Key features:
/// * Sorted, deterministic enumeration
/// * Suffix-only and full-word prefix completion
/// * Soft deletion that keeps prefixes of other words intact
#[derive(Debug, Default)]
pub struct WordTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: WordTrieConfig,
}

impl WordTrie {
    /// Creates a new empty `WordTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(WordTrieConfig::default())
    }

    /// Creates a new empty `WordTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: WordTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &WordTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts a word into the trie.
    ///
    /// Missing nodes along the path are created non-terminal, and only the
    /// final node is marked terminal. Inserting a stored word again changes
    /// nothing.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was newly stored, `false` if it was already present.
    /// * `Err(WordTrieError)` - If the word is empty or too long. The trie is left untouched.
    pub fn insert<W>(&mut self, word: W) -> WordTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        self.validate_word(word)?;

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.child_or_insert(c);
        }

        let is_new = !node.is_terminal();
        node.set_terminal(true);

        tracing::trace!(word, is_new, "Inserted word");
        Ok(is_new)
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// The empty string is never stored, so it always returns `false`.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return false;
        }

        self.root.descend(word).is_some_and(TrieNode::is_terminal)
    }

    /// Removes a word by clearing the terminal flag at the end of its path.
    ///
    /// No nodes are freed. The path remains usable as a prefix of other words.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The word was stored and has been removed.
    /// * `Ok(false)` - The path exists but did not end a stored word.
    /// * `Err(WordTrieError::NotFound)` - The path does not exist.
    /// * `Err(WordTrieError::EmptyWord)` - The word is empty.
    pub fn remove<W>(&mut self, word: W) -> WordTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        if word.is_empty() {
            return Err(WordTrieError::EmptyWord);
        }

        let node = self
            .root
            .descend_mut(word)
            .ok_or_else(|| WordTrieError::NotFound(word.to_string()))?;

        let was_terminal = node.is_terminal();
        node.set_terminal(false);

        tracing::trace!(word, was_terminal, "Removed word");
        Ok(was_terminal)
    }

    /// Returns every stored word in ascending character order.
    ///
    /// Each call performs a full traversal and returns a fresh list.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        self.root.collect_words(&mut String::new(), &mut words);
        words
    }

    /// Alias for [`WordTrie::words`].
    pub fn to_words(&self) -> Vec<String> {
        self.words()
    }

    /// Returns the suffixes that complete `prefix` into stored words.
    ///
    /// When `prefix` is itself stored, the empty suffix is included. An empty
    /// or unknown prefix yields no suffixes.
    pub fn postfixes<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return Vec::new();
        }

        let Some(node) = self.root.descend(prefix) else {
            return Vec::new();
        };

        // The matched node's own label belongs to the prefix, so only its
        // children contribute suffix characters.
        let mut suffixes = Vec::new();
        if node.is_terminal() {
            suffixes.push(String::new());
        }
        let mut buffer = String::new();
        for child in node.children() {
            child.collect_words(&mut buffer, &mut suffixes);
        }
        suffixes
    }

    /// Returns the stored words that start with `prefix`.
    ///
    /// Same set as [`WordTrie::postfixes`], with the prefix kept in front.
    pub fn complete<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        self.postfixes(prefix)
            .into_iter()
            .map(|suffix| format!("{prefix}{suffix}"))
            .collect()
    }

    /// Inserts each word in order.
    ///
    /// Stops at the first invalid word; words inserted before it stay.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of words that were newly stored.
    /// * `Err(WordTrieError)` - The error for the first rejected word.
    pub fn extend_words<I>(&mut self, words: I) -> WordTrieResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.insert(word)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Returns the number of stored words.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.root.count_words()
    }

    /// Checks whether the trie stores no words.
    ///
    /// A trie whose words have all been removed is empty even though its
    /// nodes remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.count_descendants()
    }

    /// Drops every node and word.
    pub fn clear(&mut self) {
        self.root = TrieNode::root();
    }

    /// Logs the indented outline of the trie at debug level.
    pub fn display(&self) {
        tracing::debug!("Trie outline:\n{}", self);
    }

    fn validate_word(&self, word: &str) -> WordTrieResult<()> {
        if word.is_empty() {
            return Err(WordTrieError::EmptyWord);
        }

        if let Some(max_length) = self.config.max_word_length {
            if word.chars().count() > max_length {
                return Err(WordTrieError::WordTooLong {
                    word: word.to_string(),
                    max_length,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for WordTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write_outline(f, 0)
    }
}

impl<S: AsRef<str>> Extend<S> for WordTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            if let Err(e) = self.insert(&word) {
                tracing::warn!(word = word.as_ref(), error = %e, "Skipping word");
            }
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = WordTrie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = WordTrie::new();

        assert!(trie.is_empty());

        assert!(trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());

        assert!(trie.contains("hello"));
        assert!(!trie.contains("hell"));
        assert!(!trie.contains("helloo"));
        assert!(!trie.contains("nonexistent"));

        assert!(!trie.insert("hello").unwrap());
        assert_eq!(trie.len(), 1);

        assert!(trie.remove("hello").unwrap());
        assert!(trie.is_empty());
        assert!(!trie.remove("hello").unwrap());
    }

    #[test]
    fn test_insert_keeps_intermediate_flags() {
        let mut trie = WordTrie::new();
        trie.insert("cat").unwrap();
        trie.insert("catalog").unwrap();
        trie.insert("ca").unwrap();

        assert!(trie.contains("ca"));
        assert!(trie.contains("cat"));
        assert!(trie.contains("catalog"));
        assert!(!trie.contains("cata"));
        assert_eq!(trie.node_count(), 7);
    }

    #[test]
    fn test_soft_delete_keeps_prefix() {
        let mut trie = WordTrie::new();
        trie.insert("cat").unwrap();
        trie.insert("catalog").unwrap();
        let nodes = trie.node_count();

        assert!(trie.remove("cat").unwrap());

        assert!(!trie.contains("cat"));
        assert!(trie.contains("catalog"));
        assert_eq!(trie.postfixes("cat"), vec!["alog".to_string()]);
        assert_eq!(trie.node_count(), nodes);
    }

    #[test]
    fn test_remove_missing_path() {
        let mut trie = WordTrie::new();
        trie.insert("cat").unwrap();

        assert_eq!(
            trie.remove("dog"),
            Err(WordTrieError::NotFound("dog".to_string()))
        );
        assert_eq!(
            trie.remove("cats"),
            Err(WordTrieError::NotFound("cats".to_string()))
        );
        assert_eq!(trie.remove(""), Err(WordTrieError::EmptyWord));
        assert_eq!(trie.words(), vec!["cat".to_string()]);
    }

    #[test]
    fn test_empty_word_policy() {
        let mut trie = WordTrie::new();

        assert_eq!(trie.insert(""), Err(WordTrieError::EmptyWord));
        assert!(!trie.contains(""));
        assert_eq!(trie.node_count(), 0);

        trie.insert("a").unwrap();
        assert!(trie.postfixes("").is_empty());
        assert!(trie.complete("").is_empty());
    }

    #[test]
    fn test_max_word_length() {
        let config = WordTrieConfig::new().with_max_word_length(3);
        let mut trie = WordTrie::with_config(config);

        assert!(trie.insert("abc").unwrap());
        assert_eq!(
            trie.insert("abcd"),
            Err(WordTrieError::WordTooLong {
                word: "abcd".to_string(),
                max_length: 3,
            })
        );
        assert_eq!(trie.node_count(), 3);

        // Length counts characters, not bytes
        assert!(trie.insert("äöü").unwrap());
    }

    #[test]
    fn test_prefix_completion() {
        let mut trie = WordTrie::new();
        trie.extend_words(["apple", "app", "apply", "banana"]).unwrap();

        assert_eq!(trie.postfixes("app"), vec!["", "le", "ly"]);
        assert_eq!(trie.complete("app"), vec!["app", "apple", "apply"]);
        assert_eq!(trie.complete("b"), vec!["banana"]);
        assert!(trie.postfixes("xyz").is_empty());
        assert!(trie.complete("bananas").is_empty());
    }

    #[test]
    fn test_words_sorted() {
        let trie: WordTrie = ["pear", "apple", "peach", "a"].into_iter().collect();
        assert_eq!(trie.words(), vec!["a", "apple", "peach", "pear"]);
        assert_eq!(trie.to_words(), trie.words());
    }

    #[test]
    fn test_extend_words_counts_new() {
        let mut trie = WordTrie::new();
        assert_eq!(trie.extend_words(["a", "b", "a"]).unwrap(), 2);
        assert_eq!(
            trie.extend_words(["c", "", "d"]),
            Err(WordTrieError::EmptyWord)
        );
        assert!(trie.contains("c"));
        assert!(!trie.contains("d"));
    }

    #[test]
    fn test_extend_skips_invalid() {
        let mut trie = WordTrie::new();
        trie.extend(vec!["one".to_string(), String::new(), "two".to_string()]);
        assert_eq!(trie.words(), vec!["one", "two"]);
    }

    #[test]
    fn test_display_outline() {
        let trie: WordTrie = ["ab", "a", "c"].into_iter().collect();
        assert_eq!(trie.to_string(), "\n  a*\n    b*\n  c*\n");
    }

    #[test]
    fn test_display_logs_outline() {
        let trie: WordTrie = ["mele", "mahalo"].into_iter().collect();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || trie.display());
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_root_node() {
        let mut trie: WordTrie = ["ab", "ac", "b"].into_iter().collect();
        trie.remove("b").unwrap();

        let root = trie.root();
        assert_eq!(root.label(), None);
        assert!(!root.is_terminal());
        assert_eq!(root.children().filter_map(TrieNode::label).collect::<String>(), "ab");
        assert!(root.descend("b").is_some_and(|node| !node.is_terminal()));
        assert!(root.descend("ac").is_some_and(TrieNode::is_terminal));
    }

    #[test]
    fn test_long_word_does_not_overflow() {
        let word = "a".repeat(200_000);
        let mut trie = WordTrie::new();

        assert!(trie.insert(&word).unwrap());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 200_000);
        assert!(trie.contains(&word));
        assert_eq!(trie.words(), vec![word.clone()]);
        assert_eq!(trie.complete(&word[..10]), vec![word.clone()]);
        assert_eq!(trie.postfixes(&word[..199_990]), vec!["a".repeat(10)]);

        assert!(trie.remove(&word).unwrap());
        assert!(trie.is_empty());
        drop(trie);
    }

    #[test]
    fn test_clear() {
        let mut trie: WordTrie = ["x", "y"].into_iter().collect();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 0);
    }
}
