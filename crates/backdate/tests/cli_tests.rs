// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for backdate
//!
//! Flag parsing is checked through `Config::try_parse_from`; end-to-end
//! behavior runs the compiled binary against scratch repositories.


use std::path::Path;
use std::process::{Command, Output};

use backdate::config::{Config, DEFAULT_WEEKS};
use backdate_git::Author;
use clap::Parser;
use similar_asserts::assert_eq;
use test_utils::{TempTestDir, TestGitRepo};
use tracing::Level;

// ============================================================================
// Flag parsing
// ============================================================================

#[test]
fn test_required_flags_only() {
    let config = Config::try_parse_from(["backdate", "--email", "a@x.com", "--user-name", "A"])
        .expect("parse should succeed");
    assert_eq!(config.weeks, DEFAULT_WEEKS);
    assert_eq!(config.email.as_str(), "a@x.com");
    assert_eq!(config.user_name.as_str(), "A");
    assert!(!config.include_other_users);
    assert_eq!(config.primary_author(), Author::new("A", "a@x.com"));
}

#[test]
fn test_all_flags() {
    let config = Config::try_parse_from([
        "backdate",
        "--weeks",
        "2",
        "--email",
        "a@x.com",
        "--user-name",
        "Ada Lovelace",
        "--include-other-users",
        "-C",
        "/tmp",
        "--seed",
        "42",
        "-v",
    ])
    .expect("parse should succeed");

    assert_eq!(config.weeks, 2);
    assert_eq!(config.user_name.as_str(), "Ada Lovelace");
    assert!(config.include_other_users);
    assert_eq!(config.repo.as_deref(), Some(Path::new("/tmp")));
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_negative_weeks_parse_for_validation() {
    let config = Config::try_parse_from([
        "backdate",
        "--weeks",
        "-1",
        "--email",
        "a@x.com",
        "--user-name",
        "A",
    ])
    .expect("negative weeks should reach validation");
    assert_eq!(config.weeks, -1);
    assert!(config.validate().is_err());
}

#[test]
fn test_non_numeric_weeks_rejected() {
    let result = Config::try_parse_from([
        "backdate",
        "--weeks",
        "five",
        "--email",
        "a@x.com",
        "--user-name",
        "A",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_include_other_users_takes_no_value() {
    let result = Config::try_parse_from([
        "backdate",
        "--email",
        "a@x.com",
        "--user-name",
        "A",
        "--include-other-users=true",
    ]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

#[test]
fn test_quiet_sets_warn_level() {
    let config = Config::try_parse_from([
        "backdate",
        "--email",
        "a@x.com",
        "--user-name",
        "A",
        "-q",
    ])
    .expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

// ============================================================================
// Binary
// ============================================================================

fn backdate(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_backdate"))
        .current_dir(dir)
        .args(args)
        .env_remove("BACKDATE_WEEKS")
        .env_remove("BACKDATE_EMAIL")
        .env_remove("BACKDATE_USER_NAME")
        .env_remove("BACKDATE_REPO")
        .env_remove("BACKDATE_SEED")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run backdate")
}

#[test]
fn test_binary_one_week() {
    let repo = TestGitRepo::new("bin-one-week");
    let output = backdate(
        repo.path(),
        &["--weeks", "1", "--email", "a@x.com", "--user-name", "A"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let commits = repo.commits();
    assert!(!commits.is_empty());
    for commit in &commits {
        assert_eq!(commit.author_identity().to_string().as_str(), "A <a@x.com>");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("created {} commits", commits.len())));
}

#[test]
fn test_binary_zero_weeks_fails() {
    let repo = TestGitRepo::new("bin-zero-weeks");
    let output = backdate(
        repo.path(),
        &["--weeks", "0", "--email", "a@x.com", "--user-name", "A"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("weeks must be greather than zero"),
        "stderr: {stderr}"
    );
    assert_eq!(repo.commit_count(), 0);
}

#[test]
fn test_binary_repo_flag() {
    let repo = TestGitRepo::new("bin-repo-flag");
    let elsewhere = TempTestDir::new("bin-cwd");
    let repo_path = repo.path().to_str().expect("utf-8 path");

    let output = backdate(
        elsewhere.path(),
        &[
            "-C",
            repo_path,
            "--weeks",
            "1",
            "--email",
            "a@x.com",
            "--user-name",
            "A",
            "--include-other-users",
            "--seed",
            "3",
        ],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(repo.commit_count() > 0);
}

#[test]
fn test_binary_missing_required_flag() {
    let repo = TestGitRepo::new("bin-missing-flag");
    let output = backdate(repo.path(), &["--email", "a@x.com"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--user-name"), "stderr: {stderr}");
    assert_eq!(repo.commit_count(), 0);
}
