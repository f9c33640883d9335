// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for Huaolelo.
//!
//! This module contains the crate-internal test suites:
//! - Property-based tests for the trie using proptest
//! - Word list loading and dumping against temporary files
//! - Configuration loading and validation
//! - Error formatting and reporting

pub mod test_utils;
