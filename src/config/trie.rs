// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::word_trie::WordTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Maximum word length in characters (unbounded when absent)
    pub max_word_length: Option<usize>,
}

impl TrieSettings {
    /// Builds the trie configuration described by these settings.
    pub fn to_trie_config(&self) -> WordTrieConfig {
        WordTrieConfig {
            max_word_length: self.max_word_length,
        }
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
