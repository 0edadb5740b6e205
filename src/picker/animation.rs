//! Time-based scale transitions for picker cells.
//!
//! A transition is a spring curve from the value on screen to a target. When
//! a new target arrives mid-flight the next transition starts from wherever
//! the current one is, so the latest request always wins.

use std::time::{Duration, Instant};

/// Settling constant: the spring is within 0.1% of its target at `duration`.
const SETTLE: f64 = 9.23;

/// Critically damped spring timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub duration: Duration,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
        }
    }
}

impl Spring {
    /// Progress in `0.0..=1.0` after `elapsed`, starting at rest.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }

        let omega = SETTLE / self.duration.as_secs_f64();
        let t = elapsed.as_secs_f64();

        1.0 - (1.0 + omega * t) * (-omega * t).exp()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f64,
    to: f64,
    started: Instant,
}

/// Animated scale factor of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleAnimator {
    spring: Spring,
    transition: Transition,
}

impl Default for ScaleAnimator {
    fn default() -> Self {
        Self::new(Spring::default())
    }
}

impl ScaleAnimator {
    pub fn new(spring: Spring) -> Self {
        Self {
            spring,
            transition: Transition {
                from: 1.0,
                to: 1.0,
                started: Instant::now(),
            },
        }
    }

    /// Start animating towards `target` from the value shown at `now`.
    pub fn animate_to(&mut self, target: f64, now: Instant) {
        let from = self.value_at(now);
        self.transition = Transition {
            from,
            to: target,
            started: now,
        };
    }

    /// Jump to `value` with no transition.
    pub fn snap(&mut self, value: f64) {
        self.transition = Transition {
            from: value,
            to: value,
            started: Instant::now(),
        };
    }

    /// The scale the cell is heading to.
    pub fn target(&self) -> f64 {
        self.transition.to
    }

    pub fn value_at(&self, now: Instant) -> f64 {
        let Transition { from, to, started } = self.transition;
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.spring.duration {
            return to;
        }
        from + (to - from) * self.spring.progress(elapsed)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.transition.started);
        self.transition.from != self.transition.to && elapsed < self.spring.duration
    }
}
