// SPDX-License-Identifier: MPL-2.0
//! Renders a [`SegmentedControl`] with stock Iced widgets.
//!
//! Layers, bottom to top: track, sliding highlight, segment row, dividers,
//! departing segments. A single `mouse_area` around the stack feeds pointer
//! input back as [`Message`]s in unit coordinates.

use super::control::{Message, SegmentedControl};
use super::layout::{to_pixels, to_unit};
use super::segment::{ContentInsets, SegmentContent};
use crate::ui::design_tokens::{segmented as tokens, sizing, typography};
use crate::ui::styles::segment::{self as style, SegmentLook};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, mouse_area, responsive, text, Container, Image, Row, Space, Stack, Text};
use iced::{mouse, Element, Length, Point, Rectangle, Size, Theme};
use std::time::Instant;

/// Builds the control's view. Map the result into the application message.
pub fn view(control: &SegmentedControl) -> Element<'_, Message> {
    let body = responsive(move |size: Size| {
        mouse_area(layers(control, size))
            .on_press(Message::Pressed)
            .on_release(Message::Released)
            .on_exit(Message::Exited)
            .on_move(move |position| cursor_message(position, size))
            .interaction(mouse::Interaction::Pointer)
            .into()
    });

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}

fn layers(control: &SegmentedControl, size: Size) -> Element<'_, Message> {
    let now = Instant::now();
    let frames: Vec<Rectangle> = control
        .frames()
        .into_iter()
        .map(|frame| to_pixels(frame, size))
        .collect();
    let paints_selection = control.allows_multiple_selection();

    let track = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::track);
    let mut stack = Stack::new().push(track).width(Length::Fill).height(Length::Fill);

    if let Some(highlight) = control.highlight() {
        let alpha = highlight.alpha_at(now);
        if alpha > 0.0 {
            let highlighted = highlight.is_highlighted();
            let block = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |theme: &Theme| style::highlight(theme, highlighted, alpha));
            let inset = Container::new(block).padding(tokens::HIGHLIGHT_INSET);
            stack = stack.push(positioned(to_pixels(highlight.frame_at(now), size), inset));
        }
    }

    let mut row = Row::new().height(Length::Fill);
    for (segment, frame) in control.segments().iter().zip(&frames) {
        let look = SegmentLook {
            selected: segment.is_selected(),
            highlighted: segment.is_highlighted(),
            enabled: segment.is_enabled(),
            paints_selection,
            alpha: segment.appearance().value_at(now),
        };
        row = row.push(cell(segment.content(), look, frame.width));
    }
    stack = stack.push(row);

    for (index, divider) in control.dividers().iter().enumerate() {
        if !divider.is_visible() {
            continue;
        }
        let Some(frame) = frames.get(index) else {
            continue;
        };
        let line = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::divider);
        let slot = Rectangle {
            x: frame.x + frame.width - tokens::DIVIDER_WIDTH / 2.0,
            y: 0.0,
            width: tokens::DIVIDER_WIDTH,
            height: size.height,
        };
        stack = stack.push(positioned(
            slot,
            Container::new(line).padding([tokens::DIVIDER_INSET, 0.0]),
        ));
    }

    for ghost in control.departing() {
        let alpha = ghost.alpha_at(now);
        if alpha <= 0.0 {
            continue;
        }
        let look = SegmentLook {
            alpha,
            ..SegmentLook::default()
        };
        let frame = to_pixels(ghost.frame(), size);
        stack = stack.push(positioned(frame, cell(ghost.content(), look, frame.width)));
    }

    stack.into()
}

/// One segment cell: optional image and title, centered.
fn cell<'a>(content: &'a SegmentContent, look: SegmentLook, width: f32) -> Element<'a, Message> {
    let insets = ContentInsets::for_content(content);

    let mut inner = Row::new().align_y(Vertical::Center).padding(insets.content);
    if let Some(handle) = &content.image {
        inner = inner.push(
            Image::new(handle.clone())
                .width(Length::Fixed(sizing::ICON_SM))
                .height(Length::Fixed(sizing::ICON_SM))
                .opacity(look.alpha),
        );
    }
    if let Some(title) = content.title.as_deref() {
        let label = Text::new(title)
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(style::text_color(theme, look)),
            });
        inner = inner.push(Container::new(label).padding(insets.title));
    }

    container(inner)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |theme: &Theme| style::segment(theme, look))
        .into()
}

/// Places `content` over `frame` (pixels, relative to the control).
fn positioned<'a>(frame: Rectangle, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Row::new()
        .push(Space::new().width(Length::Fixed(frame.x.max(0.0))))
        .push(
            Container::new(content)
                .width(Length::Fixed(frame.width.max(0.0)))
                .height(Length::Fill),
        )
        .height(Length::Fill)
        .into()
}

/// Converts a pointer position in pixels to a unit-space move message.
fn cursor_message(position: Point, size: Size) -> Message {
    Message::CursorMoved(to_unit(position, size))
}
