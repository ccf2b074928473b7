// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Fade and slide durations
//! - **Event Log**: Capacity of the activity log shown by the demo

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of fades and highlight slides (in milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 200;

/// Minimum animation duration (in milliseconds). Zero disables animation.
pub const MIN_ANIMATION_MS: u64 = 0;

/// Maximum animation duration (in milliseconds).
pub const MAX_ANIMATION_MS: u64 = 2000;

/// Interval between animation ticks (in milliseconds), roughly 60 fps.
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Event Log Defaults
// ==========================================================================

/// Default number of control events kept in the activity log.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 64;

/// Minimum event log capacity.
pub const MIN_EVENT_LOG_CAPACITY: usize = 1;

/// Maximum event log capacity.
pub const MAX_EVENT_LOG_CAPACITY: usize = 1024;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Animation validation
    assert!(MAX_ANIMATION_MS > MIN_ANIMATION_MS);
    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(ANIMATION_TICK_MS < DEFAULT_ANIMATION_MS);

    // Event log validation
    assert!(MIN_EVENT_LOG_CAPACITY > 0);
    assert!(MAX_EVENT_LOG_CAPACITY >= MIN_EVENT_LOG_CAPACITY);
    assert!(DEFAULT_EVENT_LOG_CAPACITY >= MIN_EVENT_LOG_CAPACITY);
    assert!(DEFAULT_EVENT_LOG_CAPACITY <= MAX_EVENT_LOG_CAPACITY);
};
