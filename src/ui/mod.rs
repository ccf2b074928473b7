// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`segmented`] - The segmented control widget
//! - [`styles`] - Centralized styling (buttons, containers, segments)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod segmented;
pub mod styles;
pub mod theming;
