// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! backdate-git: Git plumbing for backdate
//!
//! This library crate wraps the two ways backdate talks to git: the `git`
//! executable, used to stage files and write commits with an overridden
//! author and date, and a read-only `git2` view used to locate the
//! repository and read the generated history back.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use backdate_git::{Author, GitCommand, GitRepo};
//! use chrono::Utc;
//!
//! let repo = GitRepo::discover(".").expect("find repo");
//! let git = GitCommand::new(".");
//! let author = Author::new("Jimmy", "jimmy@example.com");
//!
//! git.add("notes.txt").expect("stage file");
//! git.commit("notes.txt", &author, &Utc::now()).expect("commit");
//!
//! println!("HEAD is now {}", repo.head_sha().expect("read HEAD"));
//! ```

pub mod author;
pub mod command;
pub mod commit;
pub mod error;
pub mod repo;

pub use author::Author;
pub use command::GitCommand;
pub use commit::Commit;
pub use error::GitError;
pub use repo::{GitRepo, WalkOptions};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::author::Author;
    pub use crate::command::GitCommand;
    pub use crate::commit::Commit;
    pub use crate::error::GitError;
    pub use crate::repo::{GitRepo, WalkOptions};
}
