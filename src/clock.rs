// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

/// Time left before a fixed deadline. All values are derived from the start
/// timestamp and the caller's `now`, both in seconds.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    limit: f64,
    started_at: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Calm,
    Warning,
    Critical,
}

impl Countdown {
    pub fn new(limit: f64, now: f64) -> Self {
        Self { limit, started_at: now }
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }

    pub fn remaining(&self, now: f64) -> f64 {
        (self.limit - self.elapsed(now)).max(0.0)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        self.remaining(now) <= 0.0
    }

    /// Remaining time rounded up to whole seconds, so a fresh clock reads the
    /// full limit until the first second has passed.
    pub fn whole_seconds_remaining(&self, now: f64) -> u64 {
        self.remaining(now).ceil() as u64
    }
}

impl Urgency {
    pub fn from_remaining(remaining_secs: u64) -> Self {
        if remaining_secs < 30 {
            Urgency::Critical
        } else if remaining_secs < 60 {
            Urgency::Warning
        } else {
            Urgency::Calm
        }
    }
}

/// Formats seconds as `m:ss`.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Single-shot deferred action. Scheduling again replaces the pending shot,
/// and each schedule is numbered so a firing can be traced to its request.
#[derive(Clone, Copy, Debug, Default)]
pub struct DelayedAction {
    generation: u64,
    due: Option<(u64, f64)>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: f64, delay: f64) -> u64 {
        self.generation += 1;
        self.due = Some((self.generation, now + delay));
        self.generation
    }

    /// Fires at most once per schedule, returning the generation that fired.
    pub fn poll(&mut self, now: f64) -> Option<u64> {
        match self.due {
            Some((generation, at)) if now >= at => {
                self.due = None;
                Some(generation)
            }
            _ => None,
        }
    }
}
