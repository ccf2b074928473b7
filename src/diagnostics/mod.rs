// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording segmented control activity.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds
//! - [`ControlEvent`]: Enum representing things a control reports
//! - [`EventLog`]: Bounded log of [`LoggedEvent`]s shown by the demo

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{format_indexes, ControlEvent, EventLog, LoggedEvent};
