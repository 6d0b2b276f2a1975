//! Canvas rendering of the spiral plus the gallery overlays.

use iced::advanced::graphics::core::Image;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry, Path, Text};
use iced::widget::{column, container, Stack};
use iced::{
    touch, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size,
    Theme,
};

use super::messages::Message as GalleryMessage;
use super::state::GalleryState;
use crate::engine::layout;
use crate::infra::constants::input as input_cfg;
use crate::infra::image_cache::ImageCache;
use crate::message::Message;
use crate::state::State;
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let canvas = Canvas::new(SpiralCanvas {
        gallery: &state.gallery,
        images: &state.images,
        hover_effects: state.settings.hover_effects_enabled,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let compact = state.device_class.is_compact();

    let mut layers: Vec<Element<'_, Message>> = vec![canvas.into()];
    layers.push(brand_overlay());
    layers.push(hint_overlay(compact));

    if !compact {
        if let Some(index) = state.gallery.hovered {
            if let Some(card) = state.gallery.cards.get(index) {
                layers.push(hover_panel(card));
            }
        }
    } else if let Some(index) = state.gallery.tapped {
        if let Some(card) = state.gallery.cards.get(index) {
            layers.push(tap_strip(card));
        }
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn brand_overlay() -> Element<'static, Message> {
    container(
        iced::widget::text("SPIRA")
            .size(20)
            .color(theme::TEXT_PRIMARY),
    )
    .padding(32)
    .into()
}

fn hint_overlay(compact: bool) -> Element<'static, Message> {
    let hint = if compact {
        "SWIPE TO SURF"
    } else {
        "SCROLL TO SURF"
    };
    container(
        iced::widget::text(hint).size(11).color(theme::TEXT_MUTED),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(28)
    .into()
}

/// Desktop: project title and description beside the spiral while a
/// card is hovered.
fn hover_panel(card: &super::state::CardSource) -> Element<'_, Message> {
    let description = card.description.as_deref().unwrap_or("");
    let panel = column![
        iced::widget::text("PROJECT").size(10).color(theme::TEXT_MUTED),
        iced::widget::text(card.title.as_str())
            .size(14)
            .color(theme::TEXT_PRIMARY),
        iced::widget::text(description).size(12).color(theme::TEXT_MUTED),
    ]
    .spacing(10)
    .width(320.0);

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Center)
        .padding(48)
        .into()
}

/// Compact: bottom info strip after the first tap.
fn tap_strip(card: &super::state::CardSource) -> Element<'_, Message> {
    let strip = column![
        iced::widget::text("PROJECT").size(9).color(theme::TEXT_MUTED),
        iced::widget::text(card.title.as_str())
            .size(13)
            .color(theme::TEXT_PRIMARY),
        iced::widget::text("Tap again to view")
            .size(11)
            .color(theme::TEXT_MUTED),
    ]
    .spacing(4);

    container(
        container(strip).padding(16).width(Length::Fill).style(|_| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(Color {
                    a: 0.85,
                    ..theme::BACKGROUND
                })),
                ..Default::default()
            }
        }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom)
    .into()
}

struct SpiralCanvas<'a> {
    gallery: &'a GalleryState,
    images: &'a ImageCache,
    hover_effects: bool,
}

impl canvas::Program<Message> for SpiralCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        use canvas::event::Status;

        let message = match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                // iced reports upward-positive deltas; the engine uses
                // the downward-positive browser convention.
                let delta_y = match delta {
                    ScrollDelta::Lines { y, .. } => {
                        -y * input_cfg::WHEEL_LINE_PX
                    }
                    ScrollDelta::Pixels { y, .. } => -y,
                };
                Some(GalleryMessage::Wheel(delta_y))
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                cursor.position_in(bounds).map(|p| {
                    GalleryMessage::PointerPressed { x: p.x, y: p.y }
                })
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(GalleryMessage::PointerMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Mouse(mouse::Event::ButtonReleased(
                mouse::Button::Left,
            )) => {
                let position = cursor
                    .position_in(bounds)
                    .map(|p| (p.x, p.y))
                    .or(self.gallery.cursor);
                position.map(|(x, y)| GalleryMessage::PointerReleased { x, y })
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                Some(GalleryMessage::PointerLeft)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(GalleryMessage::PointerPressed {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                Some(GalleryMessage::PointerMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                Some(GalleryMessage::PointerReleased {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Touch(touch::Event::FingerLost { .. }) => {
                Some(GalleryMessage::PointerLeft)
            }
            _ => None,
        };

        match message {
            Some(message) => {
                (Status::Captured, Some(Message::Gallery(message)))
            }
            None => (Status::Ignored, None),
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            theme::BACKGROUND,
        );

        let transforms = &self.gallery.transforms;
        let mut order: Vec<usize> = (0..transforms.len()).collect();
        order.sort_by_key(|&i| transforms[i].stack_order);

        for index in order {
            let transform = &transforms[index];
            let highlighted = self.hover_effects
                && (self.gallery.hovered == Some(index)
                    || self.gallery.tapped == Some(index));

            let rect = layout::card_rect(transform, &self.gallery.preset);
            // Approximate the Y-axis tilt by foreshortening the width.
            let foreshorten = transform.rotate_y.to_radians().cos();
            let hover_scale = if highlighted { 1.03 } else { 1.0 };
            let width = rect.width * foreshorten * hover_scale;
            let height = rect.height * hover_scale;
            let top_left = Point::new(
                transform.x - width / 2.0,
                transform.y - height / 2.0,
            );
            let size = Size::new(width, height);
            let draw_rect = Rectangle::new(top_left, size);

            let cover = self
                .gallery
                .cards
                .get(index)
                .and_then(|c| c.cover_url.as_deref())
                .and_then(|url| self.images.get(url));

            match cover {
                Some(image) => frame.draw_image(
                    draw_rect,
                    Image::new(image.handle.clone())
                        .opacity(transform.opacity),
                ),
                None => {
                    let tone = theme::placeholder_tone(index);
                    frame.fill_rectangle(
                        top_left,
                        size,
                        Color {
                            a: transform.opacity,
                            ..tone
                        },
                    );
                }
            }

            // Legibility strip behind the index label.
            let strip_height = 26.0 * transform.scale;
            frame.fill_rectangle(
                Point::new(top_left.x, top_left.y + height - strip_height),
                Size::new(width, strip_height),
                Color {
                    a: 0.35 * transform.opacity,
                    ..theme::BACKGROUND
                },
            );
            frame.fill_text(Text {
                content: format!("{index:02}"),
                position: Point::new(
                    top_left.x + 8.0 * transform.scale,
                    top_left.y + height - strip_height + 5.0 * transform.scale,
                ),
                color: theme::TEXT_PRIMARY,
                size: Pixels(11.0 * transform.scale.max(0.6)),
                ..Text::default()
            });

            if highlighted {
                frame.stroke(
                    &Path::rectangle(top_left, size),
                    canvas::Stroke::default()
                        .with_width(1.0)
                        .with_color(Color {
                            a: 0.6,
                            ..theme::ACCENT
                        }),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.gallery.input.is_dragging() {
            mouse::Interaction::Grabbing
        } else if self.gallery.hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Grab
        }
    }
}
