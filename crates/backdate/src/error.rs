// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for backdate

use std::path::PathBuf;

use backdate_git::GitError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can end a run
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Invalid options, reported before anything is written
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A git invocation failed or the repository could not be read
    #[error(transparent)]
    Git(#[from] GitError),

    /// The target repository has no working tree to write files into
    #[error("Repository has no working tree: {path}")]
    BareRepository {
        /// Path of the bare repository
        path: PathBuf,
    },

    /// `now - weeks` falls outside the representable date range
    #[error("weeks out of range: {weeks}")]
    SpanOutOfRange {
        /// The requested span
        weeks: i64,
    },

    /// The empty file for a commit could not be created
    #[error("Failed to create {path}: {source}")]
    CreateFile {
        /// Path of the file being created
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },
}
