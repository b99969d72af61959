//! Fixed-duration coordinate transitions for axis reselects.
//!
//! A reselect retargets one coordinate of every marker; the engine samples
//! tweens against a shared clock each frame. Progress is clamped, so a clock
//! advanced past its duration reports exactly `1.0` and the final sampled
//! positions equal the target positions.

use std::time::Duration;

/// Duration applied to axis reselect transitions unless configured otherwise.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(1000);

pub type EasingFn = fn(f64) -> f64;

#[must_use]
pub fn ease_linear(t: f64) -> f64 {
    t.clamp(0.0, 1.0)
}

/// Cubic in-out easing, the default for reselect transitions.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let shifted = 2.0 * t - 2.0;
        0.5 * shifted * shifted * shifted + 1.0
    }
}

/// Wall-clock driver for one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionClock {
    duration: Duration,
    elapsed: Duration,
}

impl TransitionClock {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Normalized progress in `[0, 1]`. A zero-duration clock is complete.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Start/end pair for one animated coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTween {
    pub from: f64,
    pub to: f64,
}

impl CoordinateTween {
    #[must_use]
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Samples the tween at an already-eased progress value.
    #[must_use]
    pub fn at(self, eased_progress: f64) -> f64 {
        self.from + (self.to - self.from) * eased_progress
    }
}
