// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Runner for the `git` executable
//!
//! Writes go through the `git` binary rather than `git2` so that the user's
//! own git configuration (committer identity, signing, index format) applies
//! exactly as it would on the command line.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, TimeZone};
use tracing::trace;

use crate::author::Author;
use crate::error::GitError;

const GIT: &str = "git";

/// Executor for git commands in a fixed working directory
#[derive(Debug, Clone)]
pub struct GitCommand {
    dir: PathBuf,
    program: PathBuf,
}

impl GitCommand {
    /// Create an executor that runs git inside `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            program: PathBuf::from(GIT),
        }
    }

    #[cfg(test)]
    fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// The directory git is run in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Run git with the given arguments and return its stdout
    ///
    /// # Errors
    ///
    /// Returns `GitError::GitNotFound` if the executable is missing and
    /// `GitError::CommandFailed` with the captured stderr on a non-zero exit.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        trace!(dir = %self.dir.display(), "git {}", args.join(" "));

        let output = Command::new(&self.program)
            .current_dir(&self.dir)
            .args(args)
            .output()
            .map_err(|e| {
                // A missing working directory also surfaces as NotFound
                if e.kind() == std::io::ErrorKind::NotFound && self.dir.is_dir() {
                    GitError::GitNotFound
                } else {
                    GitError::Io(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(GitError::CommandFailed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                exit_code: output.status.code().unwrap_or(-1),
            })
        }
    }

    /// Stage a path (`git add`)
    ///
    /// # Errors
    ///
    /// Returns `GitError` if git exits non-zero.
    pub fn add(&self, path: &str) -> Result<(), GitError> {
        self.run(&["add", "--", path]).map(drop)
    }

    /// Commit the index with an explicit author and author date
    ///
    /// Hooks are bypassed (`--no-verify`). The date is passed in RFC 2822
    /// form, which git accepts verbatim.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if git exits non-zero.
    pub fn commit<Tz>(
        &self,
        message: &str,
        author: &Author,
        date: &DateTime<Tz>,
    ) -> Result<(), GitError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let author = author.to_string();
        let date = date.to_rfc2822();
        self.run(&[
            "commit",
            "--no-verify",
            "-m",
            message,
            "--author",
            &author,
            "--date",
            &date,
        ])
        .map(drop)
    }
}
