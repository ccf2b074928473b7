// SPDX-License-Identifier: MPL-2.0
//! Segmented control state and selection logic.
//!
//! The control follows the "state down, messages up" pattern: the view emits
//! [`Message`]s, the owner forwards them to [`SegmentedControl::handle`], and
//! the returned [`Effect`] carries the value-changed notification.
//!
//! Every mutation is applied synchronously. Fades and slides are started
//! alongside the change and only affect what the view draws.

use super::animation::{duration_for, Transition};
use super::divider::{self, Divider};
use super::gesture::PanGesture;
use super::highlight::SelectionHighlight;
use super::layout::{frame_index_with_center, segment_frames};
use super::observer::{Observation, ObserverId, ObserverRegistry, Property, StyleObserver};
use super::segment::{Segment, SegmentContent, SegmentItem, SegmentState};
use crate::config::DEFAULT_ANIMATION_MS;
use iced::widget::image::Handle;
use iced::{Point, Rectangle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// How taps change the selection. Fixed for the lifetime of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// One segment at a time; a floating highlight slides between segments.
    #[default]
    Single,
    /// Each tap toggles the tapped segment only.
    Multiple,
    /// Like `Single` while the pointer is down; the selection is dropped when
    /// the gesture ends.
    Momentary,
}

impl SelectionMode {
    #[must_use]
    pub fn allows_multiple_selection(self) -> bool {
        matches!(self, SelectionMode::Multiple)
    }

    /// Whether a floating highlight is used.
    #[must_use]
    pub fn uses_highlight(self) -> bool {
        !self.allows_multiple_selection()
    }
}

impl std::str::FromStr for SelectionMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "multiple" => Ok(SelectionMode::Multiple),
            "momentary" => Ok(SelectionMode::Momentary),
            other => Err(format!("unknown selection mode: {other}")),
        }
    }
}

/// Pointer input forwarded from the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Pointer moved; position in unit space relative to the control.
    CursorMoved(Point),
    Pressed,
    Released,
    /// Pointer left the control; cancels an active gesture.
    Exited,
    /// Animation frame.
    Tick(Instant),
}

/// Outcome of handling a [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user changed the selection. Carries the new selected indexes.
    ValueChanged(BTreeSet<usize>),
}

/// A removed segment still fading out at its old position.
#[derive(Debug, Clone)]
pub struct DepartingSegment {
    content: SegmentContent,
    frame: Rectangle,
    alpha: Transition,
}

impl DepartingSegment {
    #[must_use]
    pub fn content(&self) -> &SegmentContent {
        &self.content
    }

    /// Frame the segment occupied when it was removed (unit space).
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    #[must_use]
    pub fn alpha_at(&self, now: Instant) -> f32 {
        self.alpha.value_at(now)
    }
}

/// A row of selectable segments.
#[derive(Debug)]
pub struct SegmentedControl {
    mode: SelectionMode,
    segments: Vec<Segment>,
    /// Parallel to `segments`.
    dividers: Vec<Divider>,
    /// Parallel to `segments`.
    style_observers: Vec<StyleObserver>,
    highlight: Option<SelectionHighlight>,
    departing: Vec<DepartingSegment>,
    gesture: PanGesture,
    observers: ObserverRegistry,
    animation_duration: Duration,
}

impl SegmentedControl {
    /// Creates a control with the given items.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = SegmentItem>, mode: SelectionMode) -> Self {
        let mut control = Self {
            mode,
            segments: Vec::new(),
            dividers: Vec::new(),
            style_observers: Vec::new(),
            highlight: None,
            departing: Vec::new(),
            gesture: PanGesture::default(),
            observers: ObserverRegistry::default(),
            animation_duration: Duration::from_millis(DEFAULT_ANIMATION_MS),
        };
        for item in items {
            let index = control.number_of_segments();
            control.insert_segment(item, index, false);
        }
        control
    }

    /// Creates a control in single or multiple selection mode.
    #[must_use]
    pub fn with_multiple_selection(
        items: impl IntoIterator<Item = SegmentItem>,
        allows_multiple_selection: bool,
    ) -> Self {
        let mode = if allows_multiple_selection {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        };
        Self::new(items, mode)
    }

    /// Sets the duration of fades and slides.
    #[must_use]
    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    #[must_use]
    pub fn allows_multiple_selection(&self) -> bool {
        self.mode.allows_multiple_selection()
    }

    #[must_use]
    pub fn number_of_segments(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn dividers(&self) -> &[Divider] {
        &self.dividers
    }

    #[must_use]
    pub fn highlight(&self) -> Option<&SelectionHighlight> {
        self.highlight.as_ref()
    }

    #[must_use]
    pub fn departing(&self) -> &[DepartingSegment] {
        &self.departing
    }

    /// Current segment frames in unit space.
    #[must_use]
    pub fn frames(&self) -> Vec<Rectangle> {
        segment_frames(self.segments.len())
    }

    // ------------------------------------------------------------------
    // Insertion and removal
    // ------------------------------------------------------------------

    /// Inserts a segment and its divider at `index`, clamped to the count.
    pub fn insert_segment(&mut self, item: impl Into<SegmentItem>, index: usize, animated: bool) {
        let now = Instant::now();
        self.prune_departing(now);
        let index = index.min(self.segments.len());
        let appearance = if animated {
            Transition::new(0.0, 1.0, now, self.animation_duration)
        } else {
            Transition::settled(1.0)
        };

        let item: SegmentItem = item.into();
        self.segments
            .insert(index, Segment::new(SegmentContent::from(item), appearance));
        self.dividers.insert(index, Divider::default());
        self.style_observers.insert(index, StyleObserver::default());
        log::debug!("inserted segment at {index} (count {})", self.segments.len());

        self.relayout(now, animated);
        self.refresh();
    }

    /// Removes the segment at `index`. Does nothing when out of range.
    pub fn remove_segment(&mut self, index: usize, animated: bool) {
        if index >= self.segments.len() {
            log::debug!("ignoring removal of segment {index} (count {})", self.segments.len());
            return;
        }
        let now = Instant::now();
        self.prune_departing(now);

        if animated {
            let frame = self.frames()[index];
            self.departing.push(DepartingSegment {
                content: self.segments[index].content().clone(),
                frame,
                alpha: Transition::new(1.0, 0.0, now, self.animation_duration),
            });
        }

        self.dividers.remove(index);
        self.segments.remove(index);
        self.style_observers.remove(index);
        log::debug!("removed segment {index} (count {})", self.segments.len());

        self.relayout(now, animated);
        self.refresh();
    }

    /// Removes segments from the end until none remain.
    pub fn remove_all_segments(&mut self) {
        while let Some(last) = self.segments.len().checked_sub(1) {
            self.remove_segment(last, false);
        }
    }

    // ------------------------------------------------------------------
    // Per-segment accessors
    // ------------------------------------------------------------------

    pub fn set_title(&mut self, index: usize, title: impl Into<Option<String>>) {
        if let Some(segment) = self.segment_mut(index) {
            segment.set_title(title.into());
        }
    }

    #[must_use]
    pub fn title_for_segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).and_then(Segment::title)
    }

    pub fn set_image(&mut self, index: usize, image: impl Into<Option<Handle>>) {
        if let Some(segment) = self.segment_mut(index) {
            segment.set_image(image.into());
        }
    }

    #[must_use]
    pub fn image_for_segment(&self, index: usize) -> Option<&Handle> {
        self.segments.get(index).and_then(Segment::image)
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(segment) = self.segment_mut(index) {
            segment.set_enabled(enabled);
        }
    }

    #[must_use]
    pub fn is_enabled_for_segment(&self, index: usize) -> bool {
        self.segments.get(index).is_some_and(Segment::is_enabled)
    }

    fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        let count = self.segments.len();
        let segment = self.segments.get_mut(index);
        if segment.is_none() {
            log::debug!("ignoring write to segment {index} (count {count})");
        }
        segment
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Indexes of the selected segments, recomputed from segment state.
    #[must_use]
    pub fn selected_segment_indexes(&self) -> BTreeSet<usize> {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| segment.is_selected())
            .map(|(index, _)| index)
            .collect()
    }

    /// First selected index, if any.
    #[must_use]
    pub fn selected_segment_index(&self) -> Option<usize> {
        self.segments.iter().position(Segment::is_selected)
    }

    /// Replaces the selection.
    ///
    /// Outside multiple mode the lowest requested index wins and every other
    /// request is dropped. Indexes past the end are ignored. Observers are
    /// notified before and after; no value-changed effect is produced.
    pub fn set_selected_segment_indexes(&mut self, indexes: &BTreeSet<usize>) {
        self.observers
            .notify(Observation::WillChange(Property::SelectedSegmentIndexes));

        let now = Instant::now();
        let mut winner_found = false;
        for (index, segment) in self.segments.iter_mut().enumerate() {
            let requested = indexes.contains(&index);
            let selected = if self.mode.allows_multiple_selection() {
                requested
            } else {
                requested && !winner_found
            };
            winner_found |= selected;
            segment.set_state(if selected {
                SegmentState::Selected
            } else {
                SegmentState::Unselected
            });
        }

        if self.mode.uses_highlight() {
            let winner = self.selected_segment_index();
            self.place_highlight(winner, now, self.animation_duration);
        }
        self.refresh();
        log::debug!(
            "selection set to {:?} (requested {:?})",
            self.selected_segment_indexes(),
            indexes
        );

        self.observers
            .notify(Observation::DidChange(Property::SelectedSegmentIndexes));
    }

    /// Registers a callback fired around programmatic selection changes.
    pub fn observe(&mut self, callback: impl FnMut(Observation) + 'static) -> ObserverId {
        self.observers.add(callback)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    /// Applies pointer input and reports user-initiated selection changes.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::CursorMoved(position) => {
                let (frames, enabled) = self.hit_test_inputs();
                match self.gesture.move_to(position, &frames, &enabled) {
                    Some(index) => self.tap(index),
                    None => Effect::None,
                }
            }
            Message::Pressed => {
                let (frames, enabled) = self.hit_test_inputs();
                match self.gesture.begin(&frames, &enabled) {
                    Some(index) => self.tap(index),
                    None => Effect::None,
                }
            }
            // Only a gesture that entered a segment resets anything; a press
            // on a gap or a disabled segment leaves the selection alone.
            Message::Released => {
                if self.gesture.end() {
                    self.finish_gesture();
                }
                Effect::None
            }
            Message::Exited => {
                if self.gesture.cancel() {
                    self.finish_gesture();
                }
                Effect::None
            }
            Message::Tick(now) => {
                self.prune_departing(now);
                Effect::None
            }
        }
    }

    /// Whether anything is still fading or sliding at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.departing.iter().any(|ghost| !ghost.alpha.is_finished(now))
            || self
                .segments
                .iter()
                .any(|segment| !segment.appearance().is_finished(now))
            || self
                .highlight
                .as_ref()
                .is_some_and(|highlight| highlight.is_animating(now))
    }

    /// Drops departing segments whose fade-out has completed.
    fn prune_departing(&mut self, now: Instant) {
        self.departing.retain(|ghost| !ghost.alpha.is_finished(now));
    }

    fn hit_test_inputs(&self) -> (Vec<Rectangle>, Vec<bool>) {
        let enabled = self.segments.iter().map(Segment::is_enabled).collect();
        (self.frames(), enabled)
    }

    /// Applies a discrete tap on `index`.
    fn tap(&mut self, index: usize) -> Effect {
        let before = self.selected_segment_indexes();
        let now = Instant::now();

        if self.mode.allows_multiple_selection() {
            let segment = &mut self.segments[index];
            let next = if segment.is_selected() {
                SegmentState::Unselected
            } else {
                SegmentState::SelectedAndHighlighted
            };
            segment.set_state(next);
        } else {
            for (candidate, segment) in self.segments.iter_mut().enumerate() {
                segment.set_state(if candidate == index {
                    SegmentState::SelectedAndHighlighted
                } else {
                    SegmentState::Unselected
                });
            }
            self.place_highlight(Some(index), now, self.animation_duration);
        }
        self.refresh();

        let after = self.selected_segment_indexes();
        if after == before {
            return Effect::None;
        }
        log::debug!("segment {index} tapped, selection {after:?}");
        Effect::ValueChanged(after)
    }

    /// Clears the pressed look once the pointer is released or lost.
    fn finish_gesture(&mut self) {
        let momentary = self.mode == SelectionMode::Momentary;
        for segment in &mut self.segments {
            let next = if momentary {
                SegmentState::Unselected
            } else {
                segment.state().without_highlight()
            };
            segment.set_state(next);
        }
        if momentary {
            self.place_highlight(None, Instant::now(), self.animation_duration);
        }
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Derived visuals
    // ------------------------------------------------------------------

    /// Moves, creates or hides the floating highlight.
    fn place_highlight(&mut self, index: Option<usize>, now: Instant, duration: Duration) {
        if !self.mode.uses_highlight() {
            return;
        }
        let frame = index.and_then(|index| self.frames().get(index).copied());
        match (frame, &mut self.highlight) {
            (Some(frame), Some(highlight)) => highlight.move_to(frame, now, duration),
            (Some(frame), slot @ None) => {
                *slot = Some(SelectionHighlight::new(frame, now, duration));
            }
            (None, Some(highlight)) => highlight.hide(now, duration),
            (None, None) => {}
        }
    }

    /// Re-targets the highlight after the frames changed.
    fn relayout(&mut self, now: Instant, animated: bool) {
        if self.highlight.is_none() {
            return;
        }
        let duration = duration_for(animated, self.animation_duration);
        let selected = self.selected_segment_index();
        self.place_highlight(selected, now, duration);
    }

    /// Recomputes divider visibility and mirrors highlighted flags.
    fn refresh(&mut self) {
        let selected: Vec<bool> = self.segments.iter().map(Segment::is_selected).collect();
        divider::update_visibility(&mut self.dividers, &selected);
        self.sync_highlight_style();
    }

    /// Mirrors a segment's highlighted flag onto the floating highlight when
    /// that segment is the one sitting under it.
    fn sync_highlight_style(&mut self) {
        let frames = self.frames();
        for (index, (segment, observer)) in self
            .segments
            .iter()
            .zip(self.style_observers.iter_mut())
            .enumerate()
        {
            let highlighted = segment.is_highlighted();
            if !observer.observe(highlighted) {
                continue;
            }
            if let Some(highlight) = self.highlight.as_mut() {
                if frame_index_with_center(&frames, highlight.frame()) == Some(index) {
                    highlight.set_highlighted(highlighted);
                }
            }
        }
    }
}

impl Default for SegmentedControl {
    fn default() -> Self {
        Self::new(Vec::new(), SelectionMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn control(count: usize, mode: SelectionMode) -> SegmentedControl {
        let items = (0..count).map(|i| SegmentItem::Title(format!("S{i}")));
        SegmentedControl::new(items, mode).animation_duration(Duration::ZERO)
    }

    fn set(indexes: &[usize]) -> BTreeSet<usize> {
        indexes.iter().copied().collect()
    }

    /// Presses and releases over the centre of segment `index`.
    fn tap(control: &mut SegmentedControl, index: usize) -> Effect {
        let frame = control.frames()[index];
        control.handle(Message::CursorMoved(frame.center()));
        let effect = control.handle(Message::Pressed);
        control.handle(Message::Released);
        effect
    }

    #[test]
    fn construction_keeps_item_order() {
        let control = control(3, SelectionMode::Single);
        assert_eq!(control.number_of_segments(), 3);
        assert_eq!(control.title_for_segment(2), Some("S2"));
        assert_eq!(control.dividers().len(), 3);
        assert!(control.highlight().is_none());
    }

    #[test]
    fn boolean_constructor_maps_to_modes() {
        let single = SegmentedControl::with_multiple_selection(Vec::new(), false);
        let multiple = SegmentedControl::with_multiple_selection(Vec::new(), true);
        assert_eq!(single.mode(), SelectionMode::Single);
        assert!(multiple.allows_multiple_selection());
    }

    #[test]
    fn insert_clamps_index_to_count() {
        let mut control = control(2, SelectionMode::Single);
        control.insert_segment("late", 99, false);
        assert_eq!(control.number_of_segments(), 3);
        assert_eq!(control.title_for_segment(2), Some("late"));
    }

    #[test]
    fn insert_in_the_middle_shifts_following_segments() {
        let mut control = control(2, SelectionMode::Single);
        control.insert_segment("mid", 1, false);
        assert_eq!(control.title_for_segment(1), Some("mid"));
        assert_eq!(control.title_for_segment(2), Some("S1"));
    }

    #[test]
    fn animated_insert_starts_transparent() {
        let mut control = control(1, SelectionMode::Single).animation_duration(Duration::from_secs(1));
        control.insert_segment("new", 1, true);
        let now = Instant::now();
        assert!(control.segments()[1].appearance().value_at(now) < 1.0);
        assert!(control.is_animating(now));
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut control = control(2, SelectionMode::Single);
        control.remove_segment(2, false);
        assert_eq!(control.number_of_segments(), 2);
    }

    #[test]
    fn animated_removal_leaves_a_fading_ghost() {
        let mut control = control(2, SelectionMode::Single).animation_duration(Duration::from_millis(50));
        control.remove_segment(0, true);
        assert_eq!(control.number_of_segments(), 1);
        assert_eq!(control.departing().len(), 1);
        assert_eq!(control.departing()[0].content().title.as_deref(), Some("S0"));

        control.handle(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert!(control.departing().is_empty());
    }

    #[test]
    fn accessors_fail_soft_out_of_range() {
        let mut control = control(1, SelectionMode::Single);
        control.set_title(5, "x".to_string());
        control.set_enabled(5, false);
        control.set_image(5, Handle::from_rgba(1, 1, vec![0u8; 4]));

        assert_eq!(control.title_for_segment(5), None);
        assert!(control.image_for_segment(5).is_none());
        assert!(!control.is_enabled_for_segment(5));
        assert_eq!(control.title_for_segment(0), Some("S0"));
    }

    #[test]
    fn tap_in_single_mode_moves_selection() {
        let mut control = control(3, SelectionMode::Single);
        tap(&mut control, 0);

        let effect = tap(&mut control, 2);
        assert_eq!(effect, Effect::ValueChanged(set(&[2])));
        assert_eq!(control.selected_segment_indexes(), set(&[2]));

        let highlight = control.highlight().expect("highlight created");
        assert_eq!(highlight.frame(), control.frames()[2]);
    }

    #[test]
    fn retapping_selected_segment_reports_nothing() {
        let mut control = control(2, SelectionMode::Single);
        tap(&mut control, 1);
        assert_eq!(tap(&mut control, 1), Effect::None);
    }

    #[test]
    fn tap_in_multiple_mode_toggles() {
        let mut control = control(3, SelectionMode::Multiple);
        tap(&mut control, 0);
        tap(&mut control, 2);
        assert_eq!(control.selected_segment_indexes(), set(&[0, 2]));

        let effect = tap(&mut control, 0);
        assert_eq!(effect, Effect::ValueChanged(set(&[2])));
        assert!(control.highlight().is_none());
    }

    #[test]
    fn pressed_segment_is_highlighted_until_release() {
        let mut control = control(2, SelectionMode::Single);
        control.handle(Message::CursorMoved(control.frames()[1].center()));
        control.handle(Message::Pressed);

        assert!(control.segments()[1].is_highlighted());
        assert!(control.highlight().is_some_and(SelectionHighlight::is_highlighted));

        control.handle(Message::Released);
        assert!(!control.segments()[1].is_highlighted());
        assert!(control.segments()[1].is_selected());
        assert!(!control.highlight().is_some_and(SelectionHighlight::is_highlighted));
    }

    #[test]
    fn pan_selects_each_entered_segment() {
        let mut control = control(3, SelectionMode::Single);
        let frames = control.frames();
        control.handle(Message::CursorMoved(frames[0].center()));
        assert_eq!(control.handle(Message::Pressed), Effect::ValueChanged(set(&[0])));

        let effect = control.handle(Message::CursorMoved(frames[1].center()));
        assert_eq!(effect, Effect::ValueChanged(set(&[1])));
        let effect = control.handle(Message::CursorMoved(frames[2].center()));
        assert_eq!(effect, Effect::ValueChanged(set(&[2])));

        control.handle(Message::Exited);
        assert!(control.segments().iter().all(|segment| !segment.is_highlighted()));
        assert_eq!(control.selected_segment_indexes(), set(&[2]));
    }

    #[test]
    fn hover_without_press_selects_nothing() {
        let mut control = control(2, SelectionMode::Single);
        let effect = control.handle(Message::CursorMoved(control.frames()[1].center()));
        assert_eq!(effect, Effect::None);
        assert!(control.selected_segment_indexes().is_empty());
    }

    #[test]
    fn disabled_segment_ignores_taps() {
        let mut control = control(2, SelectionMode::Single);
        control.set_enabled(1, false);
        assert_eq!(tap(&mut control, 1), Effect::None);
        assert!(control.selected_segment_indexes().is_empty());
    }

    #[test]
    fn momentary_selection_clears_on_release() {
        let mut control = control(3, SelectionMode::Momentary);
        control.handle(Message::CursorMoved(control.frames()[1].center()));
        assert_eq!(control.handle(Message::Pressed), Effect::ValueChanged(set(&[1])));
        assert_eq!(control.selected_segment_indexes(), set(&[1]));

        control.handle(Message::Released);
        assert!(control.selected_segment_indexes().is_empty());
        assert!(!control.highlight().is_some_and(SelectionHighlight::is_visible));
    }

    #[test]
    fn momentary_press_on_disabled_segment_keeps_selection() {
        let seen = Rc::new(RefCell::new(0));
        let mut control = control(3, SelectionMode::Momentary);
        control.set_selected_segment_indexes(&set(&[0]));
        control.set_enabled(2, false);
        let sink = Rc::clone(&seen);
        control.observe(move |_| *sink.borrow_mut() += 1);

        let frames = control.frames();
        assert_eq!(control.handle(Message::CursorMoved(frames[2].center())), Effect::None);
        assert_eq!(control.handle(Message::Pressed), Effect::None);
        assert_eq!(control.handle(Message::Released), Effect::None);

        assert_eq!(control.selected_segment_indexes(), set(&[0]));
        assert!(control.highlight().is_some_and(SelectionHighlight::is_visible));
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn momentary_exit_after_pressing_a_gap_keeps_selection() {
        let mut control = control(2, SelectionMode::Momentary);
        control.set_selected_segment_indexes(&set(&[1]));
        control.handle(Message::CursorMoved(Point::new(0.5, 2.0)));
        control.handle(Message::Pressed);
        control.handle(Message::Exited);
        assert_eq!(control.selected_segment_indexes(), set(&[1]));
    }

    #[test]
    fn finished_ghosts_are_pruned_without_ticks() {
        let mut control = control(4, SelectionMode::Single);
        for _ in 0..3 {
            control.remove_segment(0, true);
        }
        // Zero-length fades finish immediately; only the latest ghost is kept.
        assert_eq!(control.departing().len(), 1);
        assert!(!control.is_animating(Instant::now()));

        control.insert_segment("back", 0, true);
        assert!(control.departing().is_empty());
    }

    #[test]
    fn programmatic_set_in_single_mode_keeps_first() {
        let mut control = control(4, SelectionMode::Single);
        control.set_selected_segment_indexes(&set(&[1, 2, 3]));
        assert_eq!(control.selected_segment_indexes(), set(&[1]));
        assert_eq!(
            control.highlight().map(SelectionHighlight::frame),
            Some(control.frames()[1])
        );
    }

    #[test]
    fn programmatic_set_in_multiple_mode_replaces_selection() {
        let mut control = control(4, SelectionMode::Multiple);
        control.set_selected_segment_indexes(&set(&[1, 2]));
        control.set_selected_segment_indexes(&set(&[0, 3, 9]));
        assert_eq!(control.selected_segment_indexes(), set(&[0, 3]));
    }

    #[test]
    fn programmatic_clear_hides_highlight() {
        let mut control = control(2, SelectionMode::Single);
        tap(&mut control, 0);
        control.set_selected_segment_indexes(&BTreeSet::new());
        assert!(control.selected_segment_indexes().is_empty());
        assert!(!control.highlight().is_some_and(SelectionHighlight::is_visible));
    }

    #[test]
    fn observers_bracket_programmatic_sets() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut control = control(2, SelectionMode::Single);
        let sink = Rc::clone(&seen);
        control.observe(move |observation| sink.borrow_mut().push(observation));

        control.set_selected_segment_indexes(&set(&[0]));
        tap(&mut control, 1);

        assert_eq!(
            *seen.borrow(),
            vec![
                Observation::WillChange(Property::SelectedSegmentIndexes),
                Observation::DidChange(Property::SelectedSegmentIndexes),
            ]
        );
    }

    #[test]
    fn removing_selected_segment_hides_highlight() {
        let mut control = control(3, SelectionMode::Single);
        tap(&mut control, 1);
        control.remove_segment(1, false);
        assert!(control.selected_segment_indexes().is_empty());
        assert!(!control.highlight().is_some_and(SelectionHighlight::is_visible));
    }

    #[test]
    fn highlight_follows_selected_segment_after_insert() {
        let mut control = control(2, SelectionMode::Single);
        tap(&mut control, 1);
        control.insert_segment("front", 0, false);

        assert_eq!(control.selected_segment_indexes(), set(&[2]));
        assert_eq!(
            control.highlight().map(SelectionHighlight::frame),
            Some(control.frames()[2])
        );
    }

    #[test]
    fn remove_all_segments_empties_control() {
        let mut control = control(5, SelectionMode::Multiple);
        control.set_selected_segment_indexes(&set(&[0, 4]));
        control.remove_all_segments();
        assert_eq!(control.number_of_segments(), 0);
        assert!(control.dividers().is_empty());
        assert!(control.selected_segment_indexes().is_empty());
    }

    #[test]
    fn selection_mode_parses_case_insensitively() {
        assert_eq!("Momentary".parse::<SelectionMode>(), Ok(SelectionMode::Momentary));
        assert!("radio".parse::<SelectionMode>().is_err());
    }
}
