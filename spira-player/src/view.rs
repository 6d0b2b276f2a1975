//! Root view composition: the spiral, then the viewer, then the
//! settings overlay.

use iced::widget::Stack;
use iced::{Element, Length};

use crate::message::Message;
use crate::state::State;

pub fn view(state: &State) -> Element<'_, Message> {
    let mut layers: Vec<Element<'_, Message>> =
        vec![crate::gallery::view::view(state)];

    if let Some(viewer) = &state.viewer {
        layers.push(crate::viewer::view::view(state, viewer));
    }

    if state.panel.open {
        layers.push(crate::settings::view::view(state));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
