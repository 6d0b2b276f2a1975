//! Centered overlay for the animation settings.

use iced::alignment::Vertical;
use iced::widget::{button, center, column, container, row};
use iced::{Background, Color, Element, Length, Theme};

use super::Message as SettingsMessage;
use crate::message::Message;
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let settings = state.settings;

    let mut panel = column![
        iced::widget::text("ANIMATION").size(11).color(theme::TEXT_MUTED),
        setting_row(
            "Style",
            settings.style.as_str(),
            SettingsMessage::CycleStyle,
        ),
        setting_row(
            "Speed",
            settings.speed.as_str(),
            SettingsMessage::CycleSpeed,
        ),
        setting_row(
            "Hover effects",
            if settings.hover_effects_enabled {
                "on"
            } else {
                "off"
            },
            SettingsMessage::ToggleHoverEffects,
        ),
    ]
    .spacing(18);

    if state.panel.saving {
        panel = panel.push(
            iced::widget::text("saving…").size(10).color(theme::TEXT_MUTED),
        );
    }
    if let Some(error) = &state.panel.last_error {
        panel = panel.push(
            iced::widget::text(error.as_str())
                .size(10)
                .color(theme::DANGER),
        );
    }
    panel = panel.push(
        iced::widget::text("press S or Esc to close")
            .size(10)
            .color(theme::TEXT_MUTED),
    );

    center(
        container(panel)
            .padding(32)
            .width(360.0)
            .style(|_: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(Color {
                    a: 0.92,
                    ..theme::BACKGROUND
                })),
                border: iced::border::rounded(4.0),
                ..Default::default()
            }),
    )
    .into()
}

fn setting_row(
    label: &str,
    value: &str,
    on_press: SettingsMessage,
) -> Element<'static, Message> {
    row![
        iced::widget::text(label.to_owned())
            .size(13)
            .color(theme::TEXT_PRIMARY)
            .width(Length::Fill),
        button(
            iced::widget::text(value.to_owned())
                .size(12)
                .color(theme::TEXT_PRIMARY)
        )
        .padding([8, 16])
        .style(|_theme, status| button::Style {
            background: Some(Background::Color(theme::chrome_pill(
                false,
                status == button::Status::Hovered,
            ))),
            text_color: theme::TEXT_PRIMARY,
            border: iced::border::rounded(999.0),
            ..button::Style::default()
        })
        .on_press(Message::Settings(on_press)),
    ]
    .spacing(16)
    .align_y(Vertical::Center)
    .into()
}
