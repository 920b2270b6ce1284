// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for a backdate run
//!
//! This module provides the command-line/environment configuration,
//! its validation, and the logging level derived from it.

use std::path::PathBuf;

use backdate_git::Author;
use clap::Parser;

/// Weeks of history generated when `--weeks` is not given
pub const DEFAULT_WEEKS: i64 = 5;

/// Backdate - generate synthetic git history with backdated commits
#[derive(Parser, Debug, Clone)]
#[command(name = "backdate")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The number of weeks in the past to start creating git commits
    #[arg(
        long,
        env = "BACKDATE_WEEKS",
        default_value_t = DEFAULT_WEEKS,
        allow_negative_numbers = true
    )]
    pub weeks: i64,

    /// The email of the git user
    #[arg(long, env = "BACKDATE_EMAIL")]
    pub email: String,

    /// The name of the git user
    #[arg(long, env = "BACKDATE_USER_NAME")]
    pub user_name: String,

    /// Add additional users to git history
    #[arg(long, default_value = "false")]
    pub include_other_users: bool,

    /// Directory to create files and commits in
    ///
    /// Must be inside a git repository. Defaults to the current directory.
    #[arg(short = 'C', long, env = "BACKDATE_REPO")]
    pub repo: Option<PathBuf>,

    /// Seed for commit spacing and author selection
    ///
    /// Runs with the same seed and start time produce the same dates and
    /// authors. File names stay unique regardless.
    #[arg(long, env = "BACKDATE_SEED")]
    pub seed: Option<u64>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every commit as it is written. Logs go to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
            email: String::new(),
            user_name: String::new(),
            include_other_users: false,
            repo: None,
            seed: None,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Create a configuration for the given primary author
    #[must_use]
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// The identity built from `--user-name` and `--email`
    #[must_use]
    pub fn primary_author(&self) -> Author {
        Author::new(self.user_name.clone(), self.email.clone())
    }

    /// Get the directory to operate in, using the current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `weeks` is zero or negative
    /// - The repo path is specified but doesn't exist or isn't a directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weeks <= 0 {
            return Err(ConfigError::NonPositiveWeeks(self.weeks));
        }

        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `--weeks` was zero or negative
    #[error("weeks must be greather than zero")]
    NonPositiveWeeks(i64),

    /// Repo path not found
    #[error("Repo path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repo path is not a directory
    #[error("Repo path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),
}
