// SPDX-License-Identifier: MPL-2.0
//! A single selectable unit of the control.

use super::animation::Transition;
use crate::ui::design_tokens::segmented as tokens;
use iced::widget::image::Handle;
use iced::Padding;
use std::path::Path;

/// Leading inset applied to the title when a segment shows an image too.
pub const TITLE_INSET: f32 = tokens::TITLE_INSET;

/// What a segment is created with.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentItem {
    Title(String),
    Image(Handle),
}

impl SegmentItem {
    /// Builds an item from loosely typed sources such as config entries.
    ///
    /// A title wins over an image. Returns `None` when neither is present,
    /// so callers can skip the entry.
    #[must_use]
    pub fn from_parts(title: Option<&str>, image: Option<&Path>) -> Option<Self> {
        match (title, image) {
            (Some(title), _) => Some(Self::Title(title.to_string())),
            (None, Some(path)) => Some(Self::Image(Handle::from_path(path))),
            (None, None) => None,
        }
    }
}

impl From<&str> for SegmentItem {
    fn from(title: &str) -> Self {
        Self::Title(title.to_string())
    }
}

impl From<String> for SegmentItem {
    fn from(title: String) -> Self {
        Self::Title(title)
    }
}

impl From<Handle> for SegmentItem {
    fn from(handle: Handle) -> Self {
        Self::Image(handle)
    }
}

/// Title and image pair displayed by a segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentContent {
    pub title: Option<String>,
    pub image: Option<Handle>,
}

impl From<SegmentItem> for SegmentContent {
    fn from(item: SegmentItem) -> Self {
        match item {
            SegmentItem::Title(title) => Self {
                title: Some(title),
                image: None,
            },
            SegmentItem::Image(handle) => Self {
                title: None,
                image: Some(handle),
            },
        }
    }
}

/// Selection state of one segment.
///
/// Highlighting is the transient pressed look and only exists on a selected
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentState {
    #[default]
    Unselected,
    Selected,
    SelectedAndHighlighted,
}

impl SegmentState {
    #[must_use]
    pub fn is_selected(self) -> bool {
        !matches!(self, SegmentState::Unselected)
    }

    #[must_use]
    pub fn is_highlighted(self) -> bool {
        matches!(self, SegmentState::SelectedAndHighlighted)
    }

    /// Same selection, pressed look removed.
    #[must_use]
    pub fn without_highlight(self) -> Self {
        match self {
            SegmentState::SelectedAndHighlighted => SegmentState::Selected,
            other => other,
        }
    }
}

/// Padding applied around a segment's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentInsets {
    /// Padding of the whole title/image group.
    pub content: Padding,
    /// Extra padding in front of the title.
    pub title: Padding,
}

impl ContentInsets {
    /// Computes insets for the given content.
    ///
    /// With both a title and an image, the title is pushed away from the image
    /// by [`TITLE_INSET`] and the group gets the same trailing inset so it
    /// stays centered. With a single kind of content, every inset is zero.
    #[must_use]
    pub fn for_content(content: &SegmentContent) -> Self {
        if content.title.is_some() && content.image.is_some() {
            Self {
                content: Padding {
                    right: TITLE_INSET,
                    ..Padding::ZERO
                },
                title: Padding {
                    left: TITLE_INSET,
                    ..Padding::ZERO
                },
            }
        } else {
            Self {
                content: Padding::ZERO,
                title: Padding::ZERO,
            }
        }
    }
}

/// One segment of a [`SegmentedControl`](super::SegmentedControl).
#[derive(Debug, Clone)]
pub struct Segment {
    content: SegmentContent,
    enabled: bool,
    state: SegmentState,
    /// Opacity used for the insertion fade.
    appearance: Transition,
}

impl Segment {
    #[must_use]
    pub fn new(content: SegmentContent, appearance: Transition) -> Self {
        Self {
            content,
            enabled: true,
            state: SegmentState::Unselected,
            appearance,
        }
    }

    #[must_use]
    pub fn content(&self) -> &SegmentContent {
        &self.content
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.content.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.content.title = title;
    }

    #[must_use]
    pub fn image(&self) -> Option<&Handle> {
        self.content.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<Handle>) {
        self.content.image = image;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn state(&self) -> SegmentState {
        self.state
    }

    pub fn set_state(&mut self, state: SegmentState) {
        self.state = state;
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.state.is_highlighted()
    }

    #[must_use]
    pub fn appearance(&self) -> &Transition {
        &self.appearance
    }

    #[must_use]
    pub fn insets(&self) -> ContentInsets {
        ContentInsets::for_content(&self.content)
    }
}
