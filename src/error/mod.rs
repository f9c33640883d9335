// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error module for Huaolelo.
//!
//! This module provides the crate-wide error type, wrapping the errors of the
//! trie, word list and configuration layers, together with a small reporting
//! facility that routes error context to `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::word_trie::WordTrieError;
use crate::word_list::WordListError;

pub mod config;

/// Result type alias used throughout Huaolelo.
pub type HuaoleloResult<T> = Result<T, HuaoleloError>;

/// Core error enum for Huaolelo.
#[derive(Error, Debug)]
pub enum HuaoleloError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] WordTrieError),

    /// Errors raised while reading or writing a word list.
    #[error("Word list error: {0}")]
    WordList(#[from] WordListError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: HuaoleloError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: HuaoleloError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide error reporter.
static ERROR_REPORTER: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *ERROR_REPORTER.write() = Some(reporter);
}

/// Report an error through the global reporter.
///
/// Falls back to standard error when no reporter has been set.
pub fn report_error(context: ErrorContext) {
    let reporter = ERROR_REPORTER.read().clone();
    match reporter {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
