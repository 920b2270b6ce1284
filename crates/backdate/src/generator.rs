// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The commit loop
//!
//! For every timestamp of a [`Schedule`] the generator picks an author,
//! creates an empty, uniquely named file, stages it and commits it with the
//! author and date overridden. The first failure ends the run; commits
//! already written stay in place.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use backdate_git::{Author, GitCommand, GitRepo};
use chrono::{DateTime, Local, TimeZone};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::GenerateError;
use crate::schedule::Schedule;

/// Identities added by `--include-other-users`, in order
pub const OTHER_USERS: [(&str, &str); 3] = [
    ("Jimmy", "jimmy@example.com"),
    ("Bobby Tables", "btables@example.com"),
    ("Timmy", "timmy@example.com"),
];

/// Identities drawn from besides the primary author
#[must_use]
pub fn other_users(config: &Config) -> Vec<Author> {
    if !config.include_other_users {
        return Vec::new();
    }
    OTHER_USERS
        .iter()
        .map(|(name, email)| Author::new(*name, *email))
        .collect()
}

/// A single generated commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEvent<Tz: TimeZone> {
    /// Name of the empty file, also used as the commit message
    pub file_name: String,
    /// Author date of the commit
    pub timestamp: DateTime<Tz>,
    /// Who the commit is attributed to
    pub author: Author,
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct Summary<Tz: TimeZone> {
    /// Every commit written, oldest first
    pub events: Vec<CommitEvent<Tz>>,
    /// HEAD after the run
    pub head: Option<String>,
}

impl<Tz: TimeZone> Summary<Tz> {
    /// Number of commits written
    #[must_use]
    pub fn count(&self) -> usize {
        self.events.len()
    }

    /// Author date of the oldest commit written
    #[must_use]
    pub fn first(&self) -> Option<&DateTime<Tz>> {
        self.events.first().map(|e| &e.timestamp)
    }

    /// Author date of the newest commit written
    #[must_use]
    pub fn last(&self) -> Option<&DateTime<Tz>> {
        self.events.last().map(|e| &e.timestamp)
    }
}

/// Writes synthetic history into one repository
pub struct Generator {
    weeks: i64,
    seed: Option<u64>,
    dir: PathBuf,
    git: GitCommand,
    repo: GitRepo,
    primary: Author,
    others: Vec<Author>,
}

impl Generator {
    /// Validate the configuration and locate the target repository
    ///
    /// Nothing is written to disk here.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Config` for invalid options and
    /// `GenerateError::Git` if the directory is not inside a repository.
    pub fn new(config: &Config) -> Result<Self, GenerateError> {
        config.validate()?;

        let dir = config.repo_path();
        let repo = GitRepo::discover(&dir)?;
        if repo.is_bare() {
            return Err(GenerateError::BareRepository {
                path: repo.path().to_path_buf(),
            });
        }

        Ok(Self {
            weeks: config.weeks,
            seed: config.seed,
            git: GitCommand::new(&dir),
            dir,
            repo,
            primary: config.primary_author(),
            others: other_users(config),
        })
    }

    /// The authors commits are drawn from, primary first
    #[must_use]
    pub fn authors(&self) -> Vec<Author> {
        std::iter::once(&self.primary)
            .chain(&self.others)
            .cloned()
            .collect()
    }

    /// Pick an author uniformly from the primary author and the others
    fn pick_author<R: Rng>(&self, rng: &mut R) -> &Author {
        match rng.gen_range(0..=self.others.len()).checked_sub(1) {
            None => &self.primary,
            Some(i) => &self.others[i],
        }
    }

    /// The directory files are created in
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Generate history ending at the current local time
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; earlier commits are kept.
    pub fn run(&self) -> Result<Summary<Local>, GenerateError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_until(Local::now(), rng)
    }

    /// Generate history covering the configured weeks before `now`
    ///
    /// The first commit lands on the first whole second at or after
    /// `now - weeks`, since commit dates carry no sub-second part.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; earlier commits are kept.
    pub fn run_until<Tz, R>(
        &self,
        now: DateTime<Tz>,
        rng: R,
    ) -> Result<Summary<Tz>, GenerateError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
        R: Rng,
    {
        let mut schedule = Schedule::weeks_before(now, self.weeks, rng)
            .map(Schedule::whole_seconds)
            .ok_or(GenerateError::SpanOutOfRange { weeks: self.weeks })?;

        info!(
            weeks = self.weeks,
            authors = self.others.len() + 1,
            dir = %self.dir.display(),
            "Generating history"
        );

        let mut events = Vec::new();
        while let Some(timestamp) = schedule.next() {
            let author = self.pick_author(schedule.rng_mut()).clone();

            let event = CommitEvent {
                file_name: Uuid::new_v4().to_string(),
                timestamp,
                author,
            };
            self.write_commit(&event)?;
            events.push(event);
        }

        let head = match self.repo.head_sha() {
            Ok(sha) => Some(sha),
            Err(e) => {
                warn!(error = %e, "Could not read HEAD after generating history");
                None
            }
        };
        let summary = Summary { events, head };

        info!(
            commits = summary.count(),
            first = %summary.first().map(|t| t.to_rfc2822()).unwrap_or_default(),
            last = %summary.last().map(|t| t.to_rfc2822()).unwrap_or_default(),
            head = summary.head.as_deref().unwrap_or("<none>"),
            "History generated"
        );

        Ok(summary)
    }

    fn write_commit<Tz>(&self, event: &CommitEvent<Tz>) -> Result<(), GenerateError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let path = self.dir.join(&event.file_name);
        fs::File::create(&path).map_err(|source| GenerateError::CreateFile {
            path: path.clone(),
            source,
        })?;

        self.git.add(&event.file_name)?;
        self.git
            .commit(&event.file_name, &event.author, &event.timestamp)?;

        debug!(
            file = %event.file_name,
            author = %event.author,
            date = %event.timestamp.to_rfc2822(),
            "Committed"
        );
        Ok(())
    }
}
