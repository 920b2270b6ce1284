// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Randomized commit timestamps
//!
//! A [`Schedule`] walks forward from a start instant towards an exclusive end,
//! advancing by [`random_step`] each time.

use chrono::{DateTime, Duration, SubsecRound, TimeZone};
use rand::Rng;

/// Largest whole-hour component of a step
pub const MAX_STEP_HOURS: i64 = 24;

/// Minute component bounds of a step; the lower bound keeps every step positive
pub const STEP_MINUTES: (i64, i64) = (1, 60);

/// Draw the gap to the next commit: `0..=24` hours plus `1..=60` minutes
pub fn random_step<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let hours = rng.gen_range(0..=MAX_STEP_HOURS);
    let minutes = rng.gen_range(STEP_MINUTES.0..=STEP_MINUTES.1);
    Duration::hours(hours) + Duration::minutes(minutes)
}

/// Strictly increasing timestamps in `[start, end)`
#[derive(Debug, Clone)]
pub struct Schedule<Tz: TimeZone, R> {
    current: DateTime<Tz>,
    end: DateTime<Tz>,
    rng: R,
}

impl<Tz: TimeZone, R: Rng> Schedule<Tz, R> {
    /// Create a schedule starting at `start` (inclusive) and stopping before `end`
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>, rng: R) -> Self {
        Self {
            current: start,
            end,
            rng,
        }
    }

    /// Create a schedule covering the `weeks` before `now`
    ///
    /// Returns `None` when the start instant is not representable.
    pub fn weeks_before(now: DateTime<Tz>, weeks: i64, rng: R) -> Option<Self> {
        let start = Duration::try_weeks(weeks)
            .and_then(|span| now.clone().checked_sub_signed(span))?;
        Some(Self::new(start, now, rng))
    }

    /// Move the start up to the next whole second, if it has a fractional part
    ///
    /// Steps are whole minutes, so every later timestamp is whole too.
    #[must_use]
    pub fn whole_seconds(mut self) -> Self {
        let truncated = self.current.clone().trunc_subsecs(0);
        if truncated < self.current {
            self.current = truncated + Duration::seconds(1);
        } else {
            self.current = truncated;
        }
        self
    }

    /// Borrow the random source, e.g. to draw authors from the same stream
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<Tz: TimeZone, R: Rng> Iterator for Schedule<Tz, R> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.end {
            return None;
        }
        let step = random_step(&mut self.rng);
        let next = self.current.clone() + step;
        Some(std::mem::replace(&mut self.current, next))
    }
}
