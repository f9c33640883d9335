// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the word trie.

use thiserror::Error;

/// Errors that can occur during word trie operations.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WordTrieError {
    /// The word's path does not exist in the trie
    #[error("Word not found: {0}")]
    NotFound(String),

    /// Empty words cannot be stored or removed
    #[error("Empty word is not allowed")]
    EmptyWord,

    /// The word exceeds the configured maximum length
    #[error("Word too long: {word} exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The word that was too long
        word: String,
        /// The maximum allowed length in characters
        max_length: usize,
    },
}
