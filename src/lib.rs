// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Huaolelo Library
//!
//! A prefix tree over a dynamic vocabulary, with membership tests, soft
//! deletion, prefix completion and newline-delimited word list import and
//! export. The library backs the `huaolelo` binary but can also be used as a
//! dependency by other projects.
//!
//! # Architecture
//!
//! - [`data_structures::word_trie`] holds the trie engine.
//! - [`word_list`] reads and writes flat word lists.
//! - [`config`] layers file and environment configuration.
//! - [`error`] defines the crate-wide error type and reporting.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod word_list;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::word_trie::{WordTrie, WordTrieConfig, WordTrieError, WordTrieResult};

/// Version information for Huaolelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds an empty trie configured by `config`.
pub fn trie_from_config(config: &config::HuaoleloConfig) -> WordTrie {
    WordTrie::with_config(config.trie.to_trie_config())
}

/// Loads the word list at `path` into a new trie configured by `config`.
pub fn load_trie<P: AsRef<std::path::Path>>(
    path: P,
    config: &config::HuaoleloConfig,
) -> error::HuaoleloResult<WordTrie> {
    let mut trie = trie_from_config(config);
    word_list::load_from_path(&mut trie, path, config.word_list.blank_lines)?;
    Ok(trie)
}
