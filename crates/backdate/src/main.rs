// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! backdate: generate synthetic git history for testing
//!
//! Creates empty files in the current (or `-C`) directory and commits each
//! one with a randomized, backdated author date and author identity.

use backdate::config::Config;
use backdate::generator::Generator;
use clap::Parser;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the final summary line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let generator = Generator::new(&config)?;
    info!(dir = %generator.dir().display(), "Starting backdate...");

    let summary = generator.run()?;
    println!(
        "created {} commits{}",
        summary.count(),
        summary
            .head
            .as_deref()
            .map(|sha| format!(", HEAD is now {sha}"))
            .unwrap_or_default()
    );

    Ok(())
}
