// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test utilities and fixtures for Huaolelo.
//!
//! Reusable proptest strategies and a temporary-directory fixture shared by
//! the test suites.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum number of words in a generated vocabulary.
const MAX_VOCABULARY_SIZE: usize = 40;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for non-empty words.
///
/// A small alphabet makes shared prefixes between generated words likely.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[a-e]{1,8}".prop_map(|s| s).boxed()
}

/// Generate a strategy for non-empty words drawn from a mixed alphabet,
/// including multi-byte characters.
pub fn unicode_word_strategy() -> BoxedStrategy<String> {
    "[a-zA-Zäöüßé0-9_]{1,12}".prop_map(|s| s).boxed()
}

/// Generate a strategy for a set of distinct non-empty words.
pub fn vocabulary_strategy() -> BoxedStrategy<BTreeSet<String>> {
    proptest::collection::btree_set(word_strategy(), 0..MAX_VOCABULARY_SIZE).boxed()
}

/// A single trie mutation used by operation-sequence tests.
#[derive(Debug, Clone)]
pub enum TrieOp {
    /// Insert the word
    Insert(String),
    /// Remove the word
    Remove(String),
}

/// Generate a strategy for sequences of trie mutations.
pub fn trie_ops_strategy() -> BoxedStrategy<Vec<TrieOp>> {
    let op = prop_oneof![
        word_strategy().prop_map(TrieOp::Insert),
        word_strategy().prop_map(TrieOp::Remove),
    ];
    proptest::collection::vec(op, 0..60).boxed()
}

/// Test fixture for tests that touch the filesystem or environment.
///
/// Environment variables set through the fixture are removed on drop.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Path for `name` inside the fixture directory, without creating it.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
