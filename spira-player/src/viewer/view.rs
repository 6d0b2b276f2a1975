//! Canvas rendering of the open viewer plus its chrome overlays.

use std::time::Instant;

use iced::advanced::graphics::core::Image;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas::{self, Canvas, Event, Frame, Geometry};
use iced::widget::{button, column, container, row, Stack};
use iced::{
    touch, Background, Color, Element, Length, Point, Rectangle, Renderer,
    Size, Theme,
};
use spira_model::AnimationStyle;

use super::messages::Message as ViewerMessage;
use super::state::{image_rect, DetailViewer, ViewerPhase};
use crate::engine::layout::Viewport;
use crate::infra::constants::input as input_cfg;
use crate::infra::design_tokens::{CubicBezier, TransitionDurations};
use crate::infra::image_cache::ImageCache;
use crate::message::Message;
use crate::state::State;
use crate::theme;

pub fn view<'a>(
    state: &'a State,
    viewer: &'a DetailViewer,
) -> Element<'a, Message> {
    let canvas = Canvas::new(ViewerCanvas {
        viewer,
        images: &state.images,
        durations: TransitionDurations::for_speed(state.settings.speed),
        easing: CubicBezier::for_style(state.settings.style),
        fade: CubicBezier::for_style(AnimationStyle::Smooth),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let is_light = viewer.is_light_image;
    let mut layers: Vec<Element<'a, Message>> = vec![canvas.into()];

    // Chrome fades in once the open animation is underway.
    if viewer.phase == ViewerPhase::Active
        || viewer.phase == ViewerPhase::Scrollable
    {
        layers.push(close_button(is_light));
    }

    if viewer.phase == ViewerPhase::Scrollable {
        if viewer.image_count() > 1 {
            layers.push(paging_arrows(viewer, is_light));
        }
        if !viewer.details_visible {
            layers.push(details_hint(
                is_light,
                state.device_class.is_compact(),
            ));
        }
    }

    if viewer.details_visible {
        layers.push(details_panel(viewer, is_light));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn pill_style(
    is_light: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| button::Style {
        background: Some(Background::Color(theme::chrome_pill(
            is_light,
            status == button::Status::Hovered,
        ))),
        text_color: theme::chrome_text(is_light),
        border: iced::border::rounded(999.0),
        ..button::Style::default()
    }
}

fn close_button(is_light: bool) -> Element<'static, Message> {
    let close = button(
        iced::widget::text("CLOSE  ×")
            .size(12)
            .color(theme::chrome_text(is_light)),
    )
    .padding([10, 18])
    .style(pill_style(is_light))
    .on_press(Message::Viewer(ViewerMessage::CloseRequested));

    container(close)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(24)
        .into()
}

fn paging_arrows(
    viewer: &DetailViewer,
    is_light: bool,
) -> Element<'static, Message> {
    let at_first = viewer.current_image == 0;
    let at_last = viewer.current_image + 1 >= viewer.image_count();

    let mut previous = button(
        iced::widget::text("‹")
            .size(18)
            .color(theme::chrome_text(is_light)),
    )
    .padding([8, 14])
    .style(pill_style(is_light));
    if !at_first {
        previous = previous.on_press(Message::Viewer(ViewerMessage::PageBackward));
    }

    let mut next = button(
        iced::widget::text("›")
            .size(18)
            .color(theme::chrome_text(is_light)),
    )
    .padding([8, 14])
    .style(pill_style(is_light));
    if !at_last {
        next = next.on_press(Message::Viewer(ViewerMessage::PageForward));
    }

    container(
        row![
            previous,
            iced::widget::horizontal_space(),
            next,
        ]
        .width(Length::Fill)
        .align_y(Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .padding(20)
    .into()
}

fn details_hint(
    is_light: bool,
    compact: bool,
) -> Element<'static, Message> {
    let hint = if compact {
        "SWIPE UP FOR DETAILS"
    } else {
        "SCROLL FOR DETAILS"
    };
    container(
        container(
            iced::widget::text(hint)
                .size(10)
                .color(theme::chrome_muted(is_light)),
        )
        .padding([8, 16])
        .style(move |_| iced::widget::container::Style {
            background: Some(Background::Color(theme::chrome_pill(
                is_light, false,
            ))),
            border: iced::border::rounded(999.0),
            ..Default::default()
        }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Bottom)
    .padding(28)
    .into()
}

fn details_panel(
    viewer: &DetailViewer,
    is_light: bool,
) -> Element<'_, Message> {
    let description = viewer.description.as_deref().unwrap_or(
        "Exploration of form and texture through the lens of modern design.",
    );

    let mut content = column![
        iced::widget::text(viewer.title.as_str())
            .size(22)
            .color(theme::chrome_text(is_light)),
        iced::widget::text(description)
            .size(13)
            .color(theme::chrome_muted(is_light)),
    ]
    .spacing(12)
    .max_width(720.0);

    if viewer.image_count() > 1 {
        let counter = iced::widget::text(format!(
            "{} / {}",
            viewer.current_image + 1,
            viewer.image_count()
        ))
        .size(11)
        .color(theme::chrome_muted(is_light));

        let mut dots = row![].spacing(6).align_y(Vertical::Center);
        for index in 0..viewer.image_count() {
            let active = index == viewer.current_image;
            let color = if active {
                theme::chrome_text(is_light)
            } else {
                theme::chrome_pill(is_light, true)
            };
            dots = dots.push(
                button(iced::widget::text("●").size(8).color(color))
                    .padding(2)
                    .style(|_theme, _status| button::Style {
                        background: None,
                        ..button::Style::default()
                    })
                    .on_press(Message::Viewer(ViewerMessage::JumpTo(index))),
            );
        }

        content = content
            .push(row![counter, dots].spacing(14).align_y(Vertical::Center));
    }

    let backdrop = if is_light {
        Color {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 0.9,
        }
    } else {
        Color {
            a: 0.85,
            ..theme::BACKGROUND
        }
    };

    container(
        container(content)
            .padding(40)
            .width(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(Background::Color(backdrop)),
                ..Default::default()
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Bottom)
    .into()
}

struct ViewerCanvas<'a> {
    viewer: &'a DetailViewer,
    images: &'a ImageCache,
    durations: TransitionDurations,
    easing: CubicBezier,
    fade: CubicBezier,
}

impl ViewerCanvas<'_> {
    fn draw_page(
        &self,
        frame: &mut Frame,
        index: usize,
        rect: Rectangle,
        opacity: f32,
    ) {
        let image = self
            .viewer
            .images
            .get(index)
            .and_then(|url| self.images.get(url));
        match image {
            Some(image) => frame.draw_image(
                rect,
                Image::new(image.handle.clone()).opacity(opacity),
            ),
            None => frame.fill_rectangle(
                rect.position(),
                rect.size(),
                Color {
                    a: opacity,
                    ..theme::placeholder_tone(self.viewer.card_index)
                },
            ),
        }
    }
}

impl canvas::Program<Message> for ViewerCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        use canvas::event::Status;

        let message = match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let delta_y = match delta {
                    ScrollDelta::Lines { y, .. } => {
                        -y * input_cfg::WHEEL_LINE_PX
                    }
                    ScrollDelta::Pixels { y, .. } => -y,
                };
                Some(ViewerMessage::Wheel(delta_y))
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(ViewerMessage::TouchStart {
                    x: position.x,
                    y: position.y,
                })
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                Some(ViewerMessage::TouchEnd {
                    x: position.x,
                    y: position.y,
                })
            }
            _ => None,
        };

        match message {
            Some(message) => (Status::Captured, Some(Message::Viewer(message))),
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
        let now = Instant::now();
        let viewport = Viewport::new(bounds.width, bounds.height);

        let expansion = self.viewer.expansion(now, &self.durations, &self.easing);

        // Backdrop dims in with the open animation and back out on exit.
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color {
                a: expansion.clamp(0.0, 1.0),
                ..theme::BACKGROUND
            },
        );

        let rect = image_rect(self.viewer.origin, viewport, expansion);
        let draw_rect = Rectangle::new(
            Point::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
        );

        if self.viewer.phase == ViewerPhase::Exiting {
            // Only the first image shrinks back into the card.
            self.draw_page(&mut frame, 0, draw_rect, 1.0);
            return vec![frame.into_geometry()];
        }

        // Cross-fade: previous stays beneath while current fades in.
        if let Some(previous) = self.viewer.previous_image {
            self.draw_page(&mut frame, previous, draw_rect, 1.0);
        }
        let current_opacity = self
            .viewer
            .crossfade_opacity(now, &self.durations, &self.fade)
            .unwrap_or(1.0);
        self.draw_page(
            &mut frame,
            self.viewer.current_image,
            draw_rect,
            current_opacity,
        );

        vec![frame.into_geometry()]
    }
}
