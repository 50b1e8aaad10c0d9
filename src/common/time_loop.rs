// ============================================================================
// This code is part of Rusty-GAP.
// ----------------------------------------------------------------------------
// MIT License
//
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::time::{Duration, Instant};

/// A timer that can be used to time regions of code.
pub struct Timer<'a> {
    total_so_far: Duration,
    last: Instant,
    on: bool,
    name: &'a str,
}

impl<'a> Timer<'a> {
    /// prints `d` in seconds
    pub fn report(&self, d: Duration, name: &str) {
        if name.is_empty() {
            println!("{}:\t{:.6}", self.name, d.as_secs_f64());
        } else {
            println!("{}:{}:\t{:.6}", self.name, name, d.as_secs_f64());
        }
    }

    /// Creates a new timer with the given name.
    pub fn new(name: &'a str) -> Self {
        Timer {
            total_so_far: Duration::ZERO,
            last: Instant::now(),
            on: false,
            name,
        }
    }

    /// Starts the timer.
    pub fn start(&mut self) {
        self.on = true;
        self.last = Instant::now();
    }

    /// Stops the timer and returns the time since the last `start`.
    pub fn stop(&mut self) -> Duration {
        self.on = false;
        let d = Instant::now() - self.last;
        self.total_so_far += d;
        d
    }

    /// Returns the total time when timer was on since the last `new`.
    pub fn total_time(&self) -> Duration {
        if self.on {
            self.total_so_far + (Instant::now() - self.last)
        } else {
            self.total_so_far
        }
    }
}

/// Runs `body` for `rounds` timed rounds, bracketed by the untimed `init`
/// and `teardown` hooks, and returns the mean round time. The first
/// `warmup` worth of wall time is spent on untimed runs.
pub fn time_loop<I, B, T>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut init: I,
    mut body: B,
    mut teardown: T,
) -> Duration
where
    I: FnMut(),
    B: FnMut(),
    T: FnMut(),
{
    debug_assert!(rounds > 0);

    let warmup_start = Instant::now();
    while warmup_start.elapsed() < warmup {
        init();
        body();
        teardown();
    }

    let mut t = Timer::new(name);
    for _ in 0..rounds {
        init();
        t.start();
        body();
        let d = t.stop();
        t.report(d, "");
        teardown();
    }
    t.total_time() / rounds as u32
}
