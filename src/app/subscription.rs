// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the demo application.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Emits animation ticks while any control is fading or sliding.
///
/// No ticks are produced once every animation has settled, so an idle window
/// does not redraw.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
