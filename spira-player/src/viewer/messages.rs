//! Messages owned by the viewer domain.

use super::state::ViewerPhase;

#[derive(Debug, Clone)]
pub enum Message {
    /// Raw wheel delta in pixels (downward positive).
    Wheel(f32),
    /// Touch contact lifecycle for swipe classification.
    TouchStart { x: f32, y: f32 },
    TouchEnd { x: f32, y: f32 },
    /// Scheduled phase transition; dropped when the epoch is stale.
    PhaseDeadline { epoch: u64, target: ViewerPhase },
    /// Cross-fade commit window elapsed for the given sequence.
    CrossfadeElapsed { seq: u64 },
    /// Close button or an equivalent explicit close.
    CloseRequested,
    /// Exit animation finished; unmount if the epoch still matches.
    CloseFinished { epoch: u64 },
    PageForward,
    PageBackward,
    /// Jump directly to an image (the detail panel dots).
    JumpTo(usize),
}
