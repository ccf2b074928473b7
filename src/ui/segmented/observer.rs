// SPDX-License-Identifier: MPL-2.0
//! Change observation for the control.
//!
//! Two kinds of observers live here:
//! - [`StyleObserver`]: one handle per segment, held in a list parallel to the
//!   segments and dropped together with its segment. It remembers the last
//!   highlighted flag it saw so the control can react to changes.
//! - [`ObserverRegistry`]: external callbacks notified before and after a
//!   programmatic change of the selected indexes.

use std::fmt;

/// Per-segment watcher of the highlighted flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleObserver {
    last_highlighted: bool,
}

impl StyleObserver {
    #[must_use]
    pub fn new(highlighted: bool) -> Self {
        Self {
            last_highlighted: highlighted,
        }
    }

    /// Records the current flag. Returns `true` when it differs from the last
    /// observed value.
    pub fn observe(&mut self, highlighted: bool) -> bool {
        let changed = self.last_highlighted != highlighted;
        self.last_highlighted = highlighted;
        changed
    }
}

/// Observable properties of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    SelectedSegmentIndexes,
}

/// Notification delivered to registered observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    WillChange(Property),
    DidChange(Property),
}

/// Handle returned by [`ObserverRegistry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Callback = Box<dyn FnMut(Observation)>;

/// Callbacks fired synchronously around observable mutations.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    callbacks: Vec<(ObserverId, Callback)>,
}

impl ObserverRegistry {
    pub fn add(&mut self, callback: impl FnMut(Observation) + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes an observer. Returns whether it was registered.
    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, observation: Observation) {
        for (_, callback) in &mut self.callbacks {
            callback(observation);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.callbacks.len())
            .finish()
    }
}
