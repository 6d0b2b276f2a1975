//! Gallery interaction handling: every gesture family funnels into the
//! input adapter, and taps resolve against the solved layout.

use std::time::Instant;

use iced::Task;

use super::messages::Message;
use crate::engine::{DeviceClass, PointerRelease};
use crate::message::Message as AppMessage;
use crate::state::State;
use crate::viewer;

pub fn update(state: &mut State, message: Message) -> Task<AppMessage> {
    // Gestures reach the gallery only while the spiral owns the screen.
    if state.viewer.is_some() || state.panel.open {
        return Task::none();
    }

    match message {
        Message::Wheel(delta_y) => {
            let gallery = &mut state.gallery;
            gallery.input.wheel(&mut gallery.motion, delta_y);
            Task::none()
        }

        Message::PointerPressed { y, .. } => {
            state.gallery.input.press(y, Instant::now());
            Task::none()
        }

        Message::PointerMoved { x, y } => {
            let gallery = &mut state.gallery;
            gallery.cursor = Some((x, y));
            if gallery.input.is_dragging() {
                gallery.input.drag_to(&mut gallery.motion, y);
            } else if state.settings.hover_effects_enabled
                && state.device_class == DeviceClass::Desktop
            {
                gallery.hovered = gallery.hit_test(x, y);
            }
            Task::none()
        }

        Message::PointerReleased { x, y } => {
            match state.gallery.input.release(y, Instant::now()) {
                PointerRelease::Tap => on_tap(state, x, y),
                PointerRelease::Drag => Task::none(),
            }
        }

        Message::PointerLeft => {
            state.gallery.input.cancel();
            state.gallery.hovered = None;
            Task::none()
        }

        Message::KeyStep(direction) => {
            let gallery = &mut state.gallery;
            gallery.input.key_step(&mut gallery.motion, direction);
            Task::none()
        }
    }
}

fn on_tap(state: &mut State, x: f32, y: f32) -> Task<AppMessage> {
    let Some(index) = state.gallery.hit_test(x, y) else {
        state.gallery.tapped = None;
        return Task::none();
    };

    match state.device_class {
        DeviceClass::Desktop => viewer::update::open(state, index),
        DeviceClass::Compact => {
            // First tap previews the card, second tap opens it.
            if state.gallery.tapped == Some(index) {
                state.gallery.tapped = None;
                viewer::update::open(state, index)
            } else {
                state.gallery.tapped = Some(index);
                Task::none()
            }
        }
    }
}
