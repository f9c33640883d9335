// Copyright (c) 2025 Huaolelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Newline-delimited word list loading and dumping.
//!
//! A word list holds one word per line. Loading strips trailing whitespace
//! from every line before inserting it; dumping writes the trie's words in
//! enumeration order, each followed by `\n`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data_structures::word_trie::{WordTrie, WordTrieError};

/// Result type for word list operations.
pub type WordListResult<T> = Result<T, WordListError>;

/// Errors that can occur while reading or writing a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// IO error from the underlying reader or writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A blank line was found while blank lines are rejected.
    #[error("Blank line at line {line}")]
    BlankLine {
        /// 1-based line number
        line: usize,
    },

    /// The trie rejected a word.
    #[error("Invalid word at line {line}: {source}")]
    Trie {
        /// 1-based line number
        line: usize,
        /// The underlying trie error
        #[source]
        source: WordTrieError,
    },
}

/// How blank lines are treated when loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLinePolicy {
    /// Skip blank lines
    #[default]
    Skip,

    /// Fail on the first blank line
    Reject,
}

/// Outcome of loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines read from the source
    pub lines: usize,

    /// Words that were not already stored
    pub inserted: usize,

    /// Blank lines that were skipped
    pub skipped: usize,
}

/// Loads every line of `reader` into `trie`.
///
/// # Arguments
///
/// * `trie` - The trie to insert into.
/// * `reader` - Source of newline-delimited words.
/// * `policy` - What to do with lines that are blank after stripping.
///
/// # Returns
///
/// * `Ok(LoadSummary)` - Counts of lines read, words inserted and lines skipped.
/// * `Err(WordListError)` - On the first IO failure or rejected line. Words
///   from earlier lines stay inserted.
pub fn load_from_reader<R: BufRead>(
    trie: &mut WordTrie,
    reader: R,
    policy: BlankLinePolicy,
) -> WordListResult<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        summary.lines += 1;

        let word = line.trim_end();
        if word.is_empty() {
            match policy {
                BlankLinePolicy::Skip => {
                    summary.skipped += 1;
                    continue;
                }
                BlankLinePolicy::Reject => {
                    return Err(WordListError::BlankLine { line: line_number })
                }
            }
        }

        let is_new = trie.insert(word).map_err(|source| WordListError::Trie {
            line: line_number,
            source,
        })?;
        if is_new {
            summary.inserted += 1;
        }
    }

    tracing::debug!(
        lines = summary.lines,
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Loaded word list"
    );
    Ok(summary)
}

/// Loads the word list at `path` into `trie`.
///
/// See [`load_from_reader`].
pub fn load_from_path<P: AsRef<Path>>(
    trie: &mut WordTrie,
    path: P,
    policy: BlankLinePolicy,
) -> WordListResult<LoadSummary> {
    let path = path.as_ref();
    tracing::debug!(?path, "Opening word list");
    let file = File::open(path)?;
    load_from_reader(trie, BufReader::new(file), policy)
}

/// Writes every stored word to `writer`, one per line.
///
/// # Returns
///
/// The number of words written.
pub fn dump_to_writer<W: Write>(trie: &WordTrie, mut writer: W) -> WordListResult<usize> {
    let words = trie.words();
    for word in &words {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;

    tracing::debug!(words = words.len(), "Dumped word list");
    Ok(words.len())
}

/// Writes every stored word to the file at `path`, replacing its contents.
///
/// See [`dump_to_writer`].
pub fn dump_to_path<P: AsRef<Path>>(trie: &WordTrie, path: P) -> WordListResult<usize> {
    let path = path.as_ref();
    tracing::debug!(?path, "Writing word list");
    let file = File::create(path)?;
    dump_to_writer(trie, BufWriter::new(file))
}
