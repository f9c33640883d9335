// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for Huaolelo.
//!
//! This module contains the prefix tree backing every vocabulary query.

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{TrieNode, WordTrie, WordTrieConfig, WordTrieError, WordTrieResult};
