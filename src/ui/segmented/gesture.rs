// SPDX-License-Identifier: MPL-2.0
//! Pointer press/drag tracking over the segment row.
//!
//! Resolves which segment the pointer is over at each update so a drag across
//! the row selects segments the same way discrete taps do.

use super::layout::frame_index_at;
use iced::{Point, Rectangle};

/// Where the gesture is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Pointer is down; `target` is the segment it last entered. `engaged`
    /// is set once any segment has been entered during the gesture.
    Tracking { target: Option<usize>, engaged: bool },
}

/// Pan gesture state.
#[derive(Debug, Clone, Default)]
pub struct PanGesture {
    /// Last known pointer position in unit space.
    position: Option<Point>,
    phase: Phase,
}

impl PanGesture {
    /// Starts tracking at the last known pointer position.
    ///
    /// Returns the segment under the pointer when it is hit-testable.
    pub fn begin(&mut self, frames: &[Rectangle], enabled: &[bool]) -> Option<usize> {
        let target = self.resolve(frames, enabled);
        self.phase = Phase::Tracking {
            target,
            engaged: target.is_some(),
        };
        target
    }

    /// Records a pointer move.
    ///
    /// Returns a segment only when the pointer entered it during an active
    /// gesture; staying inside the same segment reports nothing.
    pub fn move_to(&mut self, position: Point, frames: &[Rectangle], enabled: &[bool]) -> Option<usize> {
        self.position = Some(position);
        let Phase::Tracking { target, engaged } = self.phase else {
            return None;
        };
        let resolved = self.resolve(frames, enabled);
        if resolved == target {
            return None;
        }
        self.phase = Phase::Tracking {
            target: resolved,
            engaged: engaged || resolved.is_some(),
        };
        resolved
    }

    /// Ends the gesture. Returns whether it entered any segment while active;
    /// a press on a gap or a disabled segment that never moved onto an
    /// enabled one returns `false`.
    pub fn end(&mut self) -> bool {
        let engaged = matches!(self.phase, Phase::Tracking { engaged: true, .. });
        self.phase = Phase::Idle;
        engaged
    }

    /// Ends the gesture and forgets the pointer position.
    pub fn cancel(&mut self) -> bool {
        self.position = None;
        self.end()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Tracking { .. })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    fn resolve(&self, frames: &[Rectangle], enabled: &[bool]) -> Option<usize> {
        let index = frame_index_at(frames, self.position?)?;
        enabled.get(index).copied().unwrap_or(false).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::segmented::layout::segment_frames;

    fn row(count: usize) -> (Vec<Rectangle>, Vec<bool>) {
        (segment_frames(count), vec![true; count])
    }

    #[test]
    fn begin_without_position_hits_nothing() {
        let (frames, enabled) = row(3);
        let mut gesture = PanGesture::default();
        assert_eq!(gesture.begin(&frames, &enabled), None);
        assert!(gesture.is_active());
    }

    #[test]
    fn begin_resolves_segment_under_pointer() {
        let (frames, enabled) = row(3);
        let mut gesture = PanGesture::default();
        gesture.move_to(Point::new(0.8, 0.5), &frames, &enabled);
        assert_eq!(gesture.begin(&frames, &enabled), Some(2));
    }

    #[test]
    fn moves_report_only_newly_entered_segments() {
        let (frames, enabled) = row(3);
        let mut gesture = PanGesture::default();
        gesture.move_to(Point::new(0.1, 0.5), &frames, &enabled);
        assert_eq!(gesture.begin(&frames, &enabled), Some(0));

        assert_eq!(gesture.move_to(Point::new(0.2, 0.5), &frames, &enabled), None);
        assert_eq!(gesture.move_to(Point::new(0.5, 0.5), &frames, &enabled), Some(1));
        assert_eq!(gesture.move_to(Point::new(0.9, 0.5), &frames, &enabled), Some(2));
        assert_eq!(
            gesture.phase(),
            Phase::Tracking {
                target: Some(2),
                engaged: true
            }
        );
    }

    #[test]
    fn moves_while_idle_only_track_position() {
        let (frames, enabled) = row(2);
        let mut gesture = PanGesture::default();
        assert_eq!(gesture.move_to(Point::new(0.7, 0.5), &frames, &enabled), None);
        assert_eq!(gesture.position(), Some(Point::new(0.7, 0.5)));
        assert!(!gesture.is_active());
    }

    #[test]
    fn disabled_segments_are_not_hit() {
        let frames = segment_frames(3);
        let enabled = vec![true, false, true];
        let mut gesture = PanGesture::default();
        gesture.move_to(Point::new(0.5, 0.5), &frames, &enabled);
        assert_eq!(gesture.begin(&frames, &enabled), None);
        assert_eq!(gesture.move_to(Point::new(0.9, 0.5), &frames, &enabled), Some(2));
    }

    #[test]
    fn end_and_cancel_return_to_idle() {
        let (frames, enabled) = row(2);
        let mut gesture = PanGesture::default();
        gesture.move_to(Point::new(0.2, 0.5), &frames, &enabled);
        gesture.begin(&frames, &enabled);
        assert!(gesture.end());
        assert!(!gesture.end());

        gesture.begin(&frames, &enabled);
        assert!(gesture.cancel());
        assert!(gesture.position().is_none());
    }

    #[test]
    fn gesture_on_disabled_segment_never_engages() {
        let frames = segment_frames(3);
        let enabled = vec![true, true, false];
        let mut gesture = PanGesture::default();
        gesture.move_to(Point::new(0.9, 0.5), &frames, &enabled);
        assert_eq!(gesture.begin(&frames, &enabled), None);
        assert!(gesture.is_active());
        assert!(!gesture.end());

        // Entering an enabled segment mid-gesture engages it, even after
        // leaving again.
        gesture.begin(&frames, &enabled);
        assert_eq!(gesture.move_to(Point::new(0.5, 0.5), &frames, &enabled), Some(1));
        assert_eq!(gesture.move_to(Point::new(0.9, 0.5), &frames, &enabled), None);
        assert!(gesture.cancel());
    }
}
