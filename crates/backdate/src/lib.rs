// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! backdate library
//!
//! This module exports the core functionality of backdate for use in
//! integration tests and as a library.

pub mod config;
pub mod error;
pub mod generator;
pub mod schedule;
