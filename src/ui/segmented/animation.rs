// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation used for fades and the sliding highlight.
//!
//! A [`Transition`] never gates state: the control applies its changes
//! immediately and the view samples the transition to decide how far the
//! visual catch-up has progressed.

use std::time::{Duration, Instant};

/// A linear-eased interpolation between two scalar values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Starts a transition from `from` to `to` at `started_at`.
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    /// A transition that is already at rest on `value`.
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, Instant::now(), Duration::ZERO)
    }

    /// Starts from whatever value is currently displayed and heads to `to`.
    ///
    /// Used when a new change supersedes an in-flight animation.
    #[must_use]
    pub fn retarget(&self, to: f32, now: Instant, duration: Duration) -> Self {
        Self::new(self.value_at(now), to, now, duration)
    }

    /// Final value of the transition.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Progress in `0.0..=1.0` at `now`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`, with an ease-out curve.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = ease_out(self.progress_at(now));
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::settled(1.0)
    }
}

/// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Picks the duration for a change: zero when the caller asked for no animation.
#[must_use]
pub fn duration_for(animated: bool, duration: Duration) -> Duration {
    if animated {
        duration
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    const STEP: Duration = Duration::from_millis(200);

    #[test]
    fn settled_transition_is_finished_immediately() {
        let transition = Transition::settled(0.5);
        let now = Instant::now();
        assert!(transition.is_finished(now));
        assert_abs_diff_eq!(transition.value_at(now), 0.5);
    }

    #[test]
    fn value_reaches_target_after_duration() {
        let start = Instant::now();
        let transition = Transition::new(0.0, 1.0, start, STEP);

        assert_abs_diff_eq!(transition.value_at(start), 0.0);
        assert_abs_diff_eq!(transition.value_at(start + STEP), 1.0);
        assert!(transition.is_finished(start + STEP));
        assert!(!transition.is_finished(start + STEP / 2));
    }

    #[test]
    fn midpoint_is_eased_past_linear() {
        let start = Instant::now();
        let transition = Transition::new(0.0, 1.0, start, STEP);
        let mid = transition.value_at(start + STEP / 2);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let start = Instant::now();
        let fade_in = Transition::new(0.0, 1.0, start, STEP);
        let now = start + STEP / 2;
        let shown = fade_in.value_at(now);

        let fade_out = fade_in.retarget(0.0, now, STEP);
        assert_abs_diff_eq!(fade_out.value_at(now), shown);
        assert_abs_diff_eq!(fade_out.target(), 0.0);
    }

    #[test]
    fn duration_for_respects_animated_flag() {
        assert_eq!(duration_for(false, STEP), Duration::ZERO);
        assert_eq!(duration_for(true, STEP), STEP);
    }
}
