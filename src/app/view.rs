// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! Top to bottom: heading, optional startup warning, one row per control
//! (target picker + control), the toolbar, the target's selection and the
//! activity log.

use super::{ControlId, Message};
use crate::diagnostics::{format_indexes, EventLog, LoggedEvent};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::segmented::{self, SegmentedControl};
use crate::ui::styles::{button as button_style, container as container_style};
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, text, Column, Container, Row, Space, Text};
use iced::{Element, Length, Theme};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Context required to render the application view.
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controls: &'a [SegmentedControl; 3],
    pub target: ControlId,
    pub event_log: &'a EventLog,
    /// i18n key of a startup warning.
    pub warning: Option<&'a str>,
}

impl<'a> ViewContext<'a> {
    fn control(&self, id: ControlId) -> &'a SegmentedControl {
        let controls: &'a [SegmentedControl; 3] = self.controls;
        &controls[id.index()]
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(heading);

    if let Some(key) = ctx.warning {
        let warning = Text::new(ctx.i18n.tr(key))
            .size(typography::BODY_SM)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).warning),
            });
        content = content.push(warning);
    }

    for id in ControlId::ALL {
        content = content.push(control_row(ctx, id));
    }

    content = content
        .push(toolbar(ctx))
        .push(selection_summary(ctx))
        .push(event_log_panel(ctx));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn control_row(ctx: ViewContext<'_>, id: ControlId) -> Element<'_, Message> {
    let style: ButtonStyle = if id == ctx.target {
        button_style::selected
    } else {
        button_style::unselected
    };
    let picker = button(Text::new(ctx.i18n.tr(id.label_key())).size(typography::BODY))
        .on_press(Message::SelectTarget(id))
        .style(style)
        .width(Length::Fixed(sizing::PICKER_WIDTH));

    let control = segmented::view(ctx.control(id)).map(move |message| Message::Control(id, message));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(picker)
        .push(Container::new(control).width(Length::Fixed(sizing::CONTROL_WIDTH)))
        .into()
}

fn action<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press_maybe(message)
        .style(button_style::unselected)
        .into()
}

fn toolbar(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let has_segments = ctx.control(ctx.target).number_of_segments() > 0;
    let when_non_empty = |message: Message| has_segments.then_some(message);
    let tr = |key: &str| ctx.i18n.tr(key);

    Row::new()
        .spacing(spacing::XS)
        .push(action(tr("action-append"), Some(Message::AppendSegment)))
        .push(action(
            tr("action-remove-last"),
            when_non_empty(Message::RemoveLastSegment),
        ))
        .push(action(
            tr("action-remove-all"),
            when_non_empty(Message::RemoveAllSegments),
        ))
        .push(action(
            tr("action-toggle-first"),
            when_non_empty(Message::ToggleFirstSegmentEnabled),
        ))
        .push(action(
            tr("action-select-ends"),
            when_non_empty(Message::SelectFirstAndLast),
        ))
        .push(action(tr("action-clear-selection"), Some(Message::ClearSelection)))
        .into()
}

fn selection_summary(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selected = ctx.control(ctx.target).selected_segment_indexes();
    Text::new(
        ctx.i18n
            .tr_with_args("selection-summary", &[("indexes", format_indexes(&selected).as_str())]),
    )
    .size(typography::BODY)
    .into()
}

fn log_line(i18n: &I18n, entry: &LoggedEvent) -> String {
    let args = entry.event.args();
    let args: Vec<(&str, &str)> = args.iter().map(|(name, value)| (*name, value.as_str())).collect();
    let message = i18n.tr_with_args(entry.event.i18n_key(), &args);
    format!("{}: {message}", entry.source)
}

fn event_log_panel(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("log-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(action(
            ctx.i18n.tr("log-clear"),
            (!ctx.event_log.is_empty()).then_some(Message::ClearLog),
        ));

    let mut lines = Column::new().spacing(spacing::XXS);
    if ctx.event_log.is_empty() {
        lines = lines.push(
            Text::new(ctx.i18n.tr("log-empty"))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_tertiary),
                }),
        );
    }
    for entry in ctx.event_log.newest_first() {
        lines = lines.push(Text::new(log_line(ctx.i18n, entry)).size(typography::BODY_SM));
    }

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(scrollable(lines).height(Length::Fill)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::LOG_PANEL_HEIGHT))
    .style(container_style::panel)
    .into()
}
