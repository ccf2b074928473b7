// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface used for the activity log.
///
/// Derived from the active `Theme` background with slight transparency and a
/// faint outline taken from the theme's strong background shade.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let outline = palette.background.strong.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..outline
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
