// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Tolerance for geometry scaled from unit space to pixels.
pub const PIXEL_EPSILON: f32 = 1e-3;
