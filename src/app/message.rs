// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::segmented::{self, SelectionMode};
use std::time::Instant;

/// Identifies one of the demo's controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Single,
    Multiple,
    Momentary,
}

impl ControlId {
    pub const ALL: [ControlId; 3] = [ControlId::Single, ControlId::Multiple, ControlId::Momentary];

    /// Position in [`ControlId::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ControlId::Single => 0,
            ControlId::Multiple => 1,
            ControlId::Momentary => 2,
        }
    }

    #[must_use]
    pub fn mode(self) -> SelectionMode {
        match self {
            ControlId::Single => SelectionMode::Single,
            ControlId::Multiple => SelectionMode::Multiple,
            ControlId::Momentary => SelectionMode::Momentary,
        }
    }

    #[must_use]
    pub fn from_mode(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => ControlId::Single,
            SelectionMode::Multiple => ControlId::Multiple,
            SelectionMode::Momentary => ControlId::Momentary,
        }
    }

    /// Stable name, used as the event log source.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ControlId::Single => "single",
            ControlId::Multiple => "multiple",
            ControlId::Momentary => "momentary",
        }
    }

    /// i18n key of the picker label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ControlId::Single => "mode-single",
            ControlId::Multiple => "mode-multiple",
            ControlId::Momentary => "mode-momentary",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input forwarded to one control.
    Control(ControlId, segmented::Message),
    /// Make a control the target of the toolbar actions.
    SelectTarget(ControlId),
    AppendSegment,
    RemoveLastSegment,
    RemoveAllSegments,
    ToggleFirstSegmentEnabled,
    SelectFirstAndLast,
    ClearSelection,
    ClearLog,
    /// Animation frame.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale (e.g. "fr") overriding config and OS.
    pub lang: Option<String>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Initial toolbar target, overriding `[control] selection_mode`.
    pub mode: Option<SelectionMode>,
}
