//! Viewer lifecycle and gesture message handling.
//!
//! All timers are epoch- or sequence-guarded tasks; closing the viewer
//! while one is pending leaves the completion to arrive and be dropped
//! instead of mutating freshly rebuilt state.

use std::time::{Duration, Instant};

use iced::Task;

use super::gestures::{GestureOutcome, ViewerKey};
use super::messages::Message;
use super::state::{DetailViewer, ViewerPhase};
use crate::infra::constants::viewer as cfg;
use crate::infra::design_tokens::TransitionDurations;
use crate::message::Message as AppMessage;
use crate::state::{State, ViewerTouch};
use crate::update::{after, request_images};

/// Activate a card: capture its screen rectangle, mount the viewer and
/// schedule the two phase deadlines against a fresh epoch.
pub fn open(state: &mut State, index: usize) -> Task<AppMessage> {
    let Some(card) = state.gallery.cards.get(index).cloned() else {
        return Task::none();
    };
    let Some(origin) = state.gallery.card_rect(index) else {
        return Task::none();
    };

    state.timer_epoch += 1;
    let epoch = state.timer_epoch;
    let now = Instant::now();
    let mut viewer = DetailViewer::open(index, &card, origin, epoch, now);
    if let Some(image) =
        viewer.current_url().and_then(|url| state.images.get(url))
    {
        viewer.is_light_image = image.is_light;
    }
    let urls = viewer.images.clone();
    state.viewer = Some(viewer);

    Task::batch([
        after(
            Duration::from_millis(cfg::ENTER_DELAY_MS),
            AppMessage::Viewer(Message::PhaseDeadline {
                epoch,
                target: ViewerPhase::Active,
            }),
        ),
        after(
            Duration::from_millis(cfg::SCROLLABLE_DELAY_MS),
            AppMessage::Viewer(Message::PhaseDeadline {
                epoch,
                target: ViewerPhase::Scrollable,
            }),
        ),
        request_images(state, urls),
    ])
}

pub fn update(state: &mut State, message: Message) -> Task<AppMessage> {
    if state.viewer.is_none() {
        return Task::none();
    }

    match message {
        Message::Wheel(delta_y) => {
            let now = Instant::now();
            let outcome = state
                .viewer
                .as_mut()
                .map(|v| v.on_wheel(delta_y, now))
                .unwrap_or_default();
            apply_outcome(state, outcome)
        }

        Message::TouchStart { x, y } => {
            state.viewer_touch = Some(ViewerTouch {
                x,
                y,
                started_at: Instant::now(),
            });
            Task::none()
        }

        Message::TouchEnd { x, y } => {
            let Some(start) = state.viewer_touch.take() else {
                return Task::none();
            };
            // Swipe paging is a compact-class gesture only.
            if !state.device_class.is_compact() {
                return Task::none();
            }
            let now = Instant::now();
            let elapsed = now.saturating_duration_since(start.started_at);
            let outcome = state
                .viewer
                .as_mut()
                .map(|v| v.on_swipe(x - start.x, y - start.y, elapsed, now))
                .unwrap_or_default();
            apply_outcome(state, outcome)
        }

        Message::PhaseDeadline { epoch, target } => {
            if let Some(viewer) = state.viewer.as_mut() {
                viewer.apply_phase_deadline(epoch, target, Instant::now());
            }
            Task::none()
        }

        Message::CrossfadeElapsed { seq } => {
            if let Some(viewer) = state.viewer.as_mut() {
                viewer.clear_previous(seq);
            }
            Task::none()
        }

        Message::CloseRequested => close(state),

        Message::CloseFinished { epoch } => {
            let finished = state
                .viewer
                .as_ref()
                .is_some_and(|v| {
                    v.epoch == epoch && v.phase == ViewerPhase::Exiting
                });
            if finished {
                state.viewer = None;
                state.viewer_touch = None;
            }
            Task::none()
        }

        Message::PageForward => {
            let target = state
                .viewer
                .as_ref()
                .map(|v| v.current_image + 1)
                .unwrap_or(0);
            request_change(state, target)
        }
        Message::PageBackward => {
            let Some(current) =
                state.viewer.as_ref().map(|v| v.current_image)
            else {
                return Task::none();
            };
            if current == 0 {
                return Task::none();
            }
            request_change(state, current - 1)
        }
        Message::JumpTo(index) => request_change(state, index),
    }
}

/// Keyboard input routed from the root handler while the viewer is up.
pub fn handle_key(state: &mut State, key: ViewerKey) -> Task<AppMessage> {
    let now = Instant::now();
    let outcome = state
        .viewer
        .as_mut()
        .map(|v| v.on_key(key, now))
        .unwrap_or_default();
    apply_outcome(state, outcome)
}

fn apply_outcome(
    state: &mut State,
    outcome: GestureOutcome,
) -> Task<AppMessage> {
    let mut tasks = Vec::new();
    if let Some(seq) = outcome.image_change {
        refresh_luma(state);
        tasks.push(schedule_clear(state, seq));
    }
    if outcome.close_requested {
        tasks.push(close(state));
    }
    Task::batch(tasks)
}

fn request_change(state: &mut State, index: usize) -> Task<AppMessage> {
    let now = Instant::now();
    let Some(seq) = state
        .viewer
        .as_mut()
        .and_then(|v| v.change_image(index, now))
    else {
        return Task::none();
    };
    refresh_luma(state);
    schedule_clear(state, seq)
}

fn schedule_clear(state: &State, seq: u64) -> Task<AppMessage> {
    let durations = TransitionDurations::for_speed(state.settings.speed);
    after(
        DetailViewer::crossfade_clear_delay(&durations),
        AppMessage::Viewer(Message::CrossfadeElapsed { seq }),
    )
}

/// Begin the exit animation under a fresh epoch; pending phase timers
/// from the open sequence can no longer apply.
fn close(state: &mut State) -> Task<AppMessage> {
    state.timer_epoch += 1;
    let epoch = state.timer_epoch;
    let now = Instant::now();
    let began = state
        .viewer
        .as_mut()
        .is_some_and(|v| v.begin_close(epoch, now));
    if !began {
        return Task::none();
    }
    let durations = TransitionDurations::for_speed(state.settings.speed);
    after(
        durations.exit,
        AppMessage::Viewer(Message::CloseFinished { epoch }),
    )
}

/// Adopt the sampled brightness of the freshly current image when its
/// texture is already decoded; otherwise keep the previous verdict
/// until the fetch completes.
fn refresh_luma(state: &mut State) {
    let Some(viewer) = state.viewer.as_mut() else {
        return;
    };
    let is_light = viewer
        .current_url()
        .and_then(|url| state.images.get(url))
        .map(|image| image.is_light);
    if let Some(is_light) = is_light {
        viewer.is_light_image = is_light;
    }
}
