//! Linear timing animations driven by an external frame clock.
//!
//! A [`TimingAnimation`] is pure state: it does nothing until a caller
//! advances it with the current [`Instant`]. At most one pass settles per
//! advance. A repeating animation starts its next pass from the frame that
//! settled the previous one, so a late frame delays the loop instead of
//! replaying the passes it missed.

use std::time::{Duration, Instant};

/// How many times a timing animation runs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// A single pass, then settle.
    #[default]
    Once,
    /// Restart from the start value forever.
    Infinite,
}

/// Result of advancing a [`TimingAnimation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSample {
    /// Current animated value.
    pub value: f64,
    /// Whether a pass settled on this advance.
    pub settled: bool,
    /// Whether the animation will never produce another value.
    pub finished: bool,
}

/// Interpolates linearly from `from` to `to` over `duration`.
#[derive(Debug, Clone)]
pub struct TimingAnimation {
    from: f64,
    to: f64,
    duration: Duration,
    repeat: Repeat,
    pass_started_at: Instant,
    finished: bool,
}

impl TimingAnimation {
    /// Starts a new animation at `started_at`.
    pub fn new(from: f64, to: f64, duration: Duration, repeat: Repeat, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            repeat,
            pass_started_at: started_at,
            finished: false,
        }
    }

    /// Start value of every pass.
    pub fn from(&self) -> f64 {
        self.from
    }

    /// End value of every pass.
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Advances the animation to `now`.
    ///
    /// A zero duration settles one pass per advance.
    pub fn advance(&mut self, now: Instant) -> TimingSample {
        if self.finished {
            return TimingSample {
                value: self.to,
                settled: false,
                finished: true,
            };
        }

        let elapsed = now.saturating_duration_since(self.pass_started_at);
        if elapsed < self.duration {
            let fraction = elapsed.as_secs_f64() / self.duration.as_secs_f64();
            return TimingSample {
                value: self.from + (self.to - self.from) * fraction,
                settled: false,
                finished: false,
            };
        }

        match self.repeat {
            Repeat::Once => self.finished = true,
            Repeat::Infinite => self.pass_started_at = now,
        }
        TimingSample {
            value: self.to,
            settled: true,
            finished: self.finished,
        }
    }
}
