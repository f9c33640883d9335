// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! Each node owns its children outright, so the structure is a strict tree
//! with no shared or back references.

use std::collections::BTreeMap;
use std::fmt;

/// A node in the word trie.
///
/// Each node represents one character of a word path. The root node carries
/// no label and is never terminal.
///
/// Word length is unbounded, so every walk over a subtree uses an explicit
/// stack instead of recursion, including teardown.
#[derive(Default)]
pub struct TrieNode {
    /// Character on the edge leading into this node (`None` for the root)
    label: Option<char>,

    /// Whether the path ending here spells a stored word
    terminal: bool,

    /// Child nodes keyed by character, iterated in sorted order
    children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    /// Creates the unlabeled root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a new non-terminal node labeled with `label`.
    pub fn new(label: char) -> Self {
        Self {
            label: Some(label),
            terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// The character this node is labeled with.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Whether this node ends a stored word.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// Returns the child labeled `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub(crate) fn child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&c)
    }

    /// Returns the child labeled `c`, creating it when absent.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }

    /// Iterates over children in ascending character order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Follows `path` from this node, returning the node it ends at.
    pub fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.child(c))
    }

    pub(crate) fn descend_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.child_mut(c)?;
        }
        Some(node)
    }

    /// Collects every stored word in this subtree, depth first in character
    /// order.
    ///
    /// `buffer` holds the characters of the path leading to this node,
    /// excluding this node's own label; it is restored before returning.
    pub(crate) fn collect_words(&self, buffer: &mut String, words: &mut Vec<String>) {
        let base = buffer.len();
        if let Some(label) = self.label {
            buffer.push(label);
        }
        if self.terminal {
            words.push(buffer.clone());
        }

        // One pending-children iterator per level below this node; the
        // buffer holds exactly one character per open level.
        let mut stack = vec![self.children.values()];
        while let Some(pending) = stack.last_mut() {
            match pending.next() {
                Some(child) => {
                    if let Some(label) = child.label {
                        buffer.push(label);
                    }
                    if child.terminal {
                        words.push(buffer.clone());
                    }
                    stack.push(child.children.values());
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        buffer.pop();
                    }
                }
            }
        }

        buffer.truncate(base);
    }

    /// Counts terminal nodes in this subtree.
    pub(crate) fn count_words(&self) -> usize {
        self.iter_subtree().filter(|node| node.terminal).count()
    }

    /// Counts nodes in this subtree, excluding this node.
    pub(crate) fn count_descendants(&self) -> usize {
        self.iter_subtree().count() - 1
    }

    /// Visits this node and every descendant, in no particular order.
    fn iter_subtree(&self) -> impl Iterator<Item = &TrieNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(node)
        })
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = depth * 2;
        match self.label {
            Some(label) => write!(f, "{:indent$}{label}", "")?,
            None => write!(f, "{:indent$}", "")?,
        }
        if self.terminal {
            write!(f, "*")?;
        }
        writeln!(f)
    }

    /// Writes the indented outline of this subtree.
    pub(crate) fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        self.write_line(f, depth)?;

        let mut stack = vec![self.children.values()];
        while let Some(pending) = stack.last_mut() {
            match pending.next() {
                Some(child) => {
                    child.write_line(f, depth + stack.len())?;
                    stack.push(child.children.values());
                }
                None => {
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("label", &self.label)
            .field("terminal", &self.terminal)
            .field("children", &self.children.len())
            .finish()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach descendants level by level so no node is dropped while it
        // still owns children.
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
