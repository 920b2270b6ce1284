// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for backdate-git

use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from git2 library
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),

    /// The `git` executable could not be found on `PATH`
    #[error("git executable not found; is git installed and on PATH?")]
    GitNotFound,

    /// A `git` invocation exited with a non-zero status
    #[error("`git {command}` failed (exit code {exit_code}): {stderr}")]
    CommandFailed {
        /// The arguments passed to git, joined with spaces
        command: String,
        /// Captured standard error, trimmed
        stderr: String,
        /// Process exit code, or -1 when terminated by a signal
        exit_code: i32,
    },

    /// Failed to spawn or talk to the `git` process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Repository not found at the specified path
    #[error("Repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid commit reference (branch, tag, or SHA)
    #[error("Invalid commit reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },
}
