// SPDX-License-Identifier: MPL-2.0
//! Control event types for activity tracking.

use std::collections::BTreeSet;
use std::time::Instant;

use crate::ui::segmented::Observation;

use super::buffer::{BufferCapacity, CircularBuffer};

/// Something that happened to a segmented control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    // ==========================================================================
    // User Input
    // ==========================================================================
    /// The selection changed through pointer input.
    ValueChanged { selected: BTreeSet<usize> },

    // ==========================================================================
    // Programmatic Changes
    // ==========================================================================
    /// A segment was inserted.
    Inserted { index: usize },

    /// A segment was removed.
    Removed { index: usize },

    /// Every segment was removed.
    RemovedAll,

    /// The enabled flag of a segment was changed.
    EnabledChanged { index: usize, enabled: bool },

    /// The selection was replaced through the API.
    SelectionSet { selected: BTreeSet<usize> },

    /// A registered observer was notified.
    Observed(Observation),
}

impl ControlEvent {
    /// Returns the i18n message key for this event.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ControlEvent::ValueChanged { .. } => "event-value-changed",
            ControlEvent::Inserted { .. } => "event-inserted",
            ControlEvent::Removed { .. } => "event-removed",
            ControlEvent::RemovedAll => "event-removed-all",
            ControlEvent::EnabledChanged { enabled: true, .. } => "event-enabled",
            ControlEvent::EnabledChanged { enabled: false, .. } => "event-disabled",
            ControlEvent::SelectionSet { .. } => "event-selection-set",
            ControlEvent::Observed(Observation::WillChange(_)) => "event-will-change",
            ControlEvent::Observed(Observation::DidChange(_)) => "event-did-change",
        }
    }

    /// Named Fluent arguments for [`Self::i18n_key`].
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            ControlEvent::ValueChanged { selected } | ControlEvent::SelectionSet { selected } => {
                vec![("indexes", format_indexes(selected))]
            }
            ControlEvent::Inserted { index }
            | ControlEvent::Removed { index }
            | ControlEvent::EnabledChanged { index, .. } => vec![("index", index.to_string())],
            ControlEvent::RemovedAll | ControlEvent::Observed(_) => Vec::new(),
        }
    }
}

/// Formats a selection as `[0, 2]`.
#[must_use]
pub fn format_indexes(indexes: &BTreeSet<usize>) -> String {
    let joined = indexes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// A [`ControlEvent`] tagged with its source control and time.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub timestamp: Instant,
    /// Name of the control that produced the event.
    pub source: &'static str,
    pub event: ControlEvent,
}

/// Bounded activity log of control events.
#[derive(Debug, Clone)]
pub struct EventLog {
    buffer: CircularBuffer<LoggedEvent>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, source: &'static str, event: ControlEvent) {
        log::debug!("{source}: {event:?}");
        self.buffer.push(LoggedEvent {
            timestamp: Instant::now(),
            source,
            event,
        });
    }

    /// Events from newest to oldest.
    pub fn newest_first(&self) -> impl Iterator<Item = &LoggedEvent> {
        self.buffer.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::segmented::Property;

    #[test]
    fn format_indexes_lists_in_order() {
        let set: BTreeSet<usize> = [2, 0].into_iter().collect();
        assert_eq!(format_indexes(&set), "[0, 2]");
        assert_eq!(format_indexes(&BTreeSet::new()), "[]");
    }

    #[test]
    fn observation_events_have_distinct_keys() {
        let will = ControlEvent::Observed(Observation::WillChange(
            Property::SelectedSegmentIndexes,
        ));
        let did = ControlEvent::Observed(Observation::DidChange(
            Property::SelectedSegmentIndexes,
        ));
        assert_ne!(will.i18n_key(), did.i18n_key());
        assert!(will.args().is_empty());
    }

    #[test]
    fn index_events_carry_index_argument() {
        let event = ControlEvent::Removed { index: 4 };
        assert_eq!(event.args(), vec![("index", "4".to_string())]);
    }

    #[test]
    fn event_log_is_bounded_and_newest_first() {
        let mut log = EventLog::new(BufferCapacity::new(2));
        log.record("single", ControlEvent::Inserted { index: 0 });
        log.record("single", ControlEvent::Inserted { index: 1 });
        log.record("single", ControlEvent::RemovedAll);

        let events: Vec<_> = log.newest_first().map(|entry| entry.event.clone()).collect();
        assert_eq!(
            events,
            vec![ControlEvent::RemovedAll, ControlEvent::Inserted { index: 1 }]
        );
    }
}
