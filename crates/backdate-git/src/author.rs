// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit author identities

use std::fmt;

/// A name/email pair attributed to a commit
///
/// Renders as `Name <email>`, the form accepted by `git commit --author`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

impl Author {
    /// Create a new author identity
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
