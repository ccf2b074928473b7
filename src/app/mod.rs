// SPDX-License-Identifier: MPL-2.0
//! Demo application showing one segmented control per selection mode.
//!
//! The toolbar acts on the *target* control, picked with the button to the
//! left of each control. Every user and programmatic change is recorded in
//! an [`EventLog`] shown at the bottom of the window.
//!
//! ```no_run
//! use iced_segments::app::{self, Flags};
//!
//! fn main() -> iced::Result {
//!     app::run(Flags::default())
//! }
//! ```

pub mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{ControlId, Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{ControlEvent, EventLog};
use crate::i18n::I18n;
use crate::ui::segmented::{self, Effect, Observation, SegmentItem, SegmentedControl};
use crate::ui::theming::ThemeMode;
use iced::{Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::time::Instant;

/// Observer notifications not yet moved to the event log.
type ObservationFeed = Rc<RefCell<Vec<(ControlId, Observation)>>>;

/// i18n keys of the segments shown when the config lists none.
const DEFAULT_SEGMENT_KEYS: [&str; 4] = ["segment-day", "segment-week", "segment-month", "segment-year"];

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    /// Indexed by [`ControlId::index`].
    controls: [SegmentedControl; 3],
    target: ControlId,
    animate_changes: bool,
    /// Number of segments appended so far, used to number new titles.
    appended: usize,
    event_log: EventLog,
    observations: ObservationFeed,
    /// i18n key of a startup warning.
    warning: Option<String>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("target", &self.target)
            .field("theme_mode", &self.theme_mode)
            .field("event_log", &self.event_log.len())
            .finish_non_exhaustive()
    }
}

/// Builds and runs the demo application.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(None, &Config::default())
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();

        let mut app = Self::from_config(flags.lang, &config);
        if let Some(mode) = flags.mode {
            app.target = ControlId::from_mode(mode);
        }
        app.warning = config_warning;

        (app, Task::none())
    }

    /// Creates the application from a loaded configuration.
    #[must_use]
    pub fn from_config(lang: Option<String>, config: &Config) -> Self {
        let i18n = I18n::new(lang, config);
        let duration = config.control.animation_duration();

        let configured = config.control.segment_items();
        let items = if configured.is_empty() {
            DEFAULT_SEGMENT_KEYS
                .iter()
                .map(|key| SegmentItem::Title(i18n.tr(key)))
                .collect()
        } else {
            configured
        };

        let observations: ObservationFeed = Rc::default();
        let controls = ControlId::ALL.map(|id| {
            let mut control =
                SegmentedControl::new(items.clone(), id.mode()).animation_duration(duration);
            let feed = Rc::clone(&observations);
            control.observe(move |observation| feed.borrow_mut().push((id, observation)));
            control
        });

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            controls,
            target: ControlId::from_mode(config.control.selection_mode),
            animate_changes: config.control.animate_changes.unwrap_or(true),
            appended: 0,
            event_log: EventLog::default(),
            observations,
            warning: None,
        }
    }

    #[must_use]
    pub fn control(&self, id: ControlId) -> &SegmentedControl {
        &self.controls[id.index()]
    }

    fn control_mut(&mut self, id: ControlId) -> &mut SegmentedControl {
        &mut self.controls[id.index()]
    }

    #[must_use]
    pub fn target(&self) -> ControlId {
        self.target
    }

    #[must_use]
    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.controls.iter().any(|control| control.is_animating(now))
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating(Instant::now()))
    }

    fn record(&mut self, source: ControlId, event: ControlEvent) {
        self.event_log.record(source.name(), event);
    }

    /// Moves pending observer notifications into the event log.
    fn drain_observations(&mut self) {
        let pending: Vec<_> = self.observations.borrow_mut().drain(..).collect();
        for (id, observation) in pending {
            self.record(id, ControlEvent::Observed(observation));
        }
    }

    fn set_target_selection(&mut self, indexes: &BTreeSet<usize>) {
        let target = self.target;
        let control = self.control_mut(target);
        control.set_selected_segment_indexes(indexes);
        let selected = control.selected_segment_indexes();
        self.drain_observations();
        self.record(target, ControlEvent::SelectionSet { selected });
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let target = self.target;
        let animated = self.animate_changes;

        match message {
            Message::Control(id, message) => {
                if let Effect::ValueChanged(selected) = self.control_mut(id).handle(message) {
                    self.record(id, ControlEvent::ValueChanged { selected });
                }
            }
            Message::SelectTarget(id) => {
                self.target = id;
            }
            Message::AppendSegment => {
                self.appended += 1;
                let title = self
                    .i18n
                    .tr_with_args("segment-new", &[("number", self.appended.to_string().as_str())]);
                let control = self.control_mut(target);
                let index = control.number_of_segments();
                control.insert_segment(title, index, animated);
                self.record(target, ControlEvent::Inserted { index });
            }
            Message::RemoveLastSegment => {
                let control = self.control_mut(target);
                if let Some(index) = control.number_of_segments().checked_sub(1) {
                    control.remove_segment(index, animated);
                    self.record(target, ControlEvent::Removed { index });
                }
            }
            Message::RemoveAllSegments => {
                self.control_mut(target).remove_all_segments();
                self.record(target, ControlEvent::RemovedAll);
            }
            Message::ToggleFirstSegmentEnabled => {
                let control = self.control_mut(target);
                if control.number_of_segments() > 0 {
                    let enabled = !control.is_enabled_for_segment(0);
                    control.set_enabled(0, enabled);
                    self.record(target, ControlEvent::EnabledChanged { index: 0, enabled });
                }
            }
            Message::SelectFirstAndLast => {
                let count = self.control(target).number_of_segments();
                if let Some(last) = count.checked_sub(1) {
                    let indexes: BTreeSet<usize> = [0, last].into_iter().collect();
                    self.set_target_selection(&indexes);
                }
            }
            Message::ClearSelection => {
                self.set_target_selection(&BTreeSet::new());
            }
            Message::ClearLog => {
                self.event_log.clear();
            }
            Message::Tick(now) => {
                for control in &mut self.controls {
                    control.handle(segmented::Message::Tick(now));
                }
            }
        }

        self.drain_observations();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controls: &self.controls,
            target: self.target,
            event_log: &self.event_log,
            warning: self.warning.as_deref(),
        })
    }
}
