// SPDX-License-Identifier: MPL-2.0
//! Floating view that slides between segments in single-selection mode.

use super::animation::Transition;
use super::layout::lerp_frame;
use iced::Rectangle;
use std::time::{Duration, Instant};

/// The single reusable highlight overlay.
#[derive(Debug, Clone)]
pub struct SelectionHighlight {
    /// Frame the highlight is heading to (unit space).
    frame: Rectangle,
    /// Frame the current slide started from.
    from_frame: Rectangle,
    slide: Transition,
    alpha: Transition,
    /// Pressed look, mirrored from the segment underneath.
    highlighted: bool,
}

impl SelectionHighlight {
    /// Creates the highlight exactly over `frame`, fading in from transparent.
    #[must_use]
    pub fn new(frame: Rectangle, now: Instant, duration: Duration) -> Self {
        Self {
            frame,
            from_frame: frame,
            slide: Transition::settled(1.0),
            alpha: Transition::new(0.0, 1.0, now, duration),
            highlighted: false,
        }
    }

    /// Target frame, ignoring any slide in progress.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Frame currently on screen.
    #[must_use]
    pub fn frame_at(&self, now: Instant) -> Rectangle {
        lerp_frame(self.from_frame, self.frame, self.slide.value_at(now))
    }

    #[must_use]
    pub fn alpha_at(&self, now: Instant) -> f32 {
        self.alpha.value_at(now)
    }

    /// Whether the highlight is (or is becoming) fully visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.alpha.target() > 0.0
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Slides to `frame` from wherever the highlight is drawn right now, then
    /// fades to fully visible.
    ///
    /// A hidden highlight jumps to the new frame instead of sliding across.
    pub fn move_to(&mut self, frame: Rectangle, now: Instant, duration: Duration) {
        if self.is_visible() {
            self.from_frame = self.frame_at(now);
            self.slide = Transition::new(0.0, 1.0, now, duration);
        } else {
            self.from_frame = frame;
            self.slide = Transition::settled(1.0);
        }
        self.frame = frame;
        self.show(now, duration);
    }

    pub fn show(&mut self, now: Instant, duration: Duration) {
        if self.alpha.target() < 1.0 {
            self.alpha = self.alpha.retarget(1.0, now, duration);
        }
    }

    pub fn hide(&mut self, now: Instant, duration: Duration) {
        if self.alpha.target() > 0.0 {
            self.alpha = self.alpha.retarget(0.0, now, duration);
        }
        self.highlighted = false;
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.slide.is_finished(now) || !self.alpha.is_finished(now)
    }
}
