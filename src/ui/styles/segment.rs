// SPDX-License-Identifier: MPL-2.0
//! Segmented control styles.
//!
//! Selected colors use the brand palette in both light and dark themes, the
//! same way toggle groups are styled elsewhere.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    segmented as tokens, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Visual inputs for one segment cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLook {
    pub selected: bool,
    pub highlighted: bool,
    pub enabled: bool,
    /// Whether the cell paints its own selected background. Off when a
    /// floating highlight is drawn underneath instead.
    pub paints_selection: bool,
    /// Fade multiplier, `0.0..=1.0`.
    pub alpha: f32,
}

impl Default for SegmentLook {
    fn default() -> Self {
        Self {
            selected: false,
            highlighted: false,
            enabled: true,
            paints_selection: false,
            alpha: opacity::OPAQUE,
        }
    }
}

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Brand fill for a selected block, darker while pressed.
fn selected_fill(highlighted: bool) -> Color {
    if highlighted {
        palette::PRIMARY_600
    } else {
        palette::PRIMARY_500
    }
}

/// Rounded track behind all segments.
pub fn track(theme: &Theme) -> container::Style {
    let (background, border_color) = if is_light(theme) {
        (palette::GRAY_100, palette::GRAY_200)
    } else {
        (palette::GRAY_700, palette::GRAY_400)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: tokens::TRACK_BORDER_WIDTH,
            radius: tokens::TRACK_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Background of one segment cell.
pub fn segment(_theme: &Theme, look: SegmentLook) -> container::Style {
    let background = if look.selected && look.paints_selection {
        Some(Background::Color(with_alpha(
            selected_fill(look.highlighted),
            look.alpha,
        )))
    } else {
        None
    };

    container::Style {
        background,
        border: Border {
            radius: tokens::SEGMENT_RADIUS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Title color for a segment cell.
pub fn text_color(theme: &Theme, look: SegmentLook) -> Color {
    let base = if !look.enabled {
        palette::GRAY_400
    } else if look.selected {
        WHITE
    } else if is_light(theme) {
        palette::GRAY_900
    } else {
        WHITE
    };
    with_alpha(base, look.alpha)
}

/// Thin separator between segments.
pub fn divider(theme: &Theme) -> container::Style {
    let color = if is_light(theme) {
        palette::GRAY_400
    } else {
        palette::GRAY_200
    };
    container::Style {
        background: Some(Background::Color(Color {
            a: tokens::DIVIDER_OPACITY,
            ..color
        })),
        ..Default::default()
    }
}

/// Floating selection highlight.
pub fn highlight(_theme: &Theme, highlighted: bool, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(
            selected_fill(highlighted),
            alpha,
        ))),
        border: Border {
            color: with_alpha(palette::PRIMARY_600, alpha),
            width: tokens::HIGHLIGHT_BORDER_WIDTH,
            radius: tokens::HIGHLIGHT_RADIUS.into(),
        },
        shadow: if highlighted { shadow::NONE } else { shadow::SM },
        ..Default::default()
    }
}
