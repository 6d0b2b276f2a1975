//! Root-level subscription composition

use iced::{keyboard, window, Subscription};

use crate::message::Message;
use crate::state::State;

/// Composes all recurring event sources into a single batch.
///
/// The frame subscription is the animation driver: it delivers one
/// timestamp per display refresh while the gallery is mounted, and
/// ends with the application (nothing leaks past teardown).
pub fn subscription(_state: &State) -> Subscription<Message> {
    Subscription::batch([
        window::frames().map(Message::FrameTick),
        keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        }),
        window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
    ])
}
