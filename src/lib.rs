// SPDX-License-Identifier: MPL-2.0
//! `iced_segments` is a segmented control widget for the Iced GUI framework.
//!
//! A segmented control is a horizontal row of segments, each showing a title
//! or an image, supporting single, multiple and momentary selection. The
//! crate also ships a demo application with Fluent localization and a
//! TOML configuration file.

#![doc(html_root_url = "https://docs.rs/iced_segments/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod ui;

#[cfg(test)]
mod test_utils;
