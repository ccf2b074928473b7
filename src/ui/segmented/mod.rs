// SPDX-License-Identifier: MPL-2.0
//! Segmented control: a row of selectable segments.
//!
//! - [`control`] - selection state machine and public API
//! - [`segment`] - segment content, state and insets
//! - [`divider`] - separators between segments
//! - [`highlight`] - floating highlight used outside multiple-selection mode
//! - [`gesture`] - press/drag tracking
//! - [`layout`] - unit-space frames and hit-testing
//! - [`observer`] - style-sync handles and change observers
//! - [`animation`] - fades and slides
//! - [`view`] - Iced rendering

pub mod animation;
pub mod control;
pub mod divider;
pub mod gesture;
pub mod highlight;
pub mod layout;
pub mod observer;
pub mod segment;
pub mod view;

pub use control::{DepartingSegment, Effect, Message, SegmentedControl, SelectionMode};
pub use divider::Divider;
pub use highlight::SelectionHighlight;
pub use observer::{Observation, ObserverId, Property};
pub use segment::{ContentInsets, Segment, SegmentContent, SegmentItem, SegmentState, TITLE_INSET};
pub use view::view;
