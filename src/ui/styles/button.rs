// SPDX-License-Identifier: MPL-2.0
//! Button styles for the demo toolbar and the target picker.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(background: Color, text_color: Color, border_color: Color, shadow: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

fn muted(theme: &Theme) -> button::Style {
    let background = if matches!(theme, Theme::Light) {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    filled(background, palette::GRAY_400, palette::GRAY_400, shadow::NONE)
}

/// Brand-colored action button. Also used for the target control in the picker.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => filled(
            palette::PRIMARY_500,
            WHITE,
            palette::PRIMARY_600,
            shadow::SM,
        ),
        button::Status::Hovered => filled(
            palette::PRIMARY_400,
            WHITE,
            palette::PRIMARY_500,
            shadow::MD,
        ),
        button::Status::Disabled => muted(theme),
    }
}

/// Neutral button, adapting to light and dark themes.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(background, text_color, palette::GRAY_400, shadow::NONE)
        }
        button::Status::Hovered => {
            let hover = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            filled(hover, text_color, palette::PRIMARY_500, shadow::SM)
        }
        button::Status::Disabled => muted(theme),
    }
}
