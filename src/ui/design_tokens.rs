// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the segmented control and the demo window.
//!
//! Generic scales (palette, opacity, spacing, sizing, typography, border,
//! radius, shadow) come first. The [`segmented`] module maps them onto the
//! parts of the control: track, segment cells, dividers and the sliding
//! highlight.
//!
//! ```
//! use iced_segments::ui::design_tokens::{palette, segmented, spacing};
//! use iced::Color;
//!
//! let divider = Color {
//!     a: segmented::DIVIDER_OPACITY,
//!     ..palette::GRAY_400
//! };
//! assert_eq!(segmented::DIVIDER_INSET, spacing::XS);
//! # let _ = divider;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0); // Hover
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9); // Selected
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8); // Pressed

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);

    /// Base color of drop shadows; alpha is set per shadow.
    pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.25);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Semi-transparent panels (activity log).
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Segment image size.
    pub const ICON_SM: f32 = 16.0;

    /// Height of buttons and of the segmented control row.
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Demo layout
    pub const CONTROL_WIDTH: f32 = 420.0;
    pub const PICKER_WIDTH: f32 = 140.0;
    pub const LOG_PANEL_HEIGHT: f32 = 220.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Window heading.
    pub const TITLE_MD: f32 = 20.0;

    /// Panel headers.
    pub const TITLE_SM: f32 = 18.0;

    /// Segment titles, picker labels.
    pub const BODY: f32 = 14.0;

    /// Toolbar actions, log lines.
    pub const BODY_SM: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::SHADOW,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Segmented Control
// ============================================================================

pub mod segmented {
    use super::{border, opacity, radius, spacing};

    /// Outline of the track behind all segments.
    pub const TRACK_BORDER_WIDTH: f32 = border::WIDTH_SM;
    pub const TRACK_RADIUS: f32 = radius::MD;

    /// Corner radius of a cell painting its own selection (multiple mode).
    pub const SEGMENT_RADIUS: f32 = radius::MD;

    /// Leading inset of a title placed next to an image.
    pub const TITLE_INSET: f32 = spacing::XS;

    pub const DIVIDER_WIDTH: f32 = border::WIDTH_SM;
    /// Gap between a divider and the top and bottom of the track.
    pub const DIVIDER_INSET: f32 = spacing::XS;
    pub const DIVIDER_OPACITY: f32 = opacity::OVERLAY_MEDIUM;

    /// Gap between the highlight and the edge of its segment frame.
    pub const HIGHLIGHT_INSET: f32 = border::WIDTH_MD;
    pub const HIGHLIGHT_BORDER_WIDTH: f32 = border::WIDTH_SM;
    pub const HIGHLIGHT_RADIUS: f32 = radius::SM;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_SM < sizing::BUTTON_HEIGHT);
    assert!(sizing::CONTROL_WIDTH > sizing::PICKER_WIDTH);

    // Typography validation
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    // Border and radius validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD && radius::MD > radius::SM);

    // Segmented control validation
    assert!(segmented::HIGHLIGHT_RADIUS <= segmented::TRACK_RADIUS);
    assert!(segmented::HIGHLIGHT_INSET >= segmented::TRACK_BORDER_WIDTH);
    assert!(2.0 * segmented::DIVIDER_INSET < sizing::BUTTON_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn highlight_fits_inside_control_row() {
        let inner = sizing::BUTTON_HEIGHT - 2.0 * segmented::HIGHLIGHT_INSET;
        assert!(inner > sizing::ICON_SM);
        assert!(inner > typography::BODY);
    }
}
