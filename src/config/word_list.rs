// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word list configuration module.

use super::{ConfigResult, Validate};
use crate::word_list::BlankLinePolicy;
use serde::{Deserialize, Serialize};

/// Word list settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordListSettings {
    /// Treatment of lines that are blank after stripping
    pub blank_lines: BlankLinePolicy,
}

impl Validate for WordListSettings {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
