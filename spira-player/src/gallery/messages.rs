//! Messages owned by the gallery domain. Pointer messages cover both
//! mouse and touch; the input adapter applies the class-specific
//! sensitivities.

#[derive(Debug, Clone)]
pub enum Message {
    /// Raw wheel delta in pixels (downward positive).
    Wheel(f32),
    PointerPressed { x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    PointerReleased { x: f32, y: f32 },
    /// Pointer left the window; cancels any drag without a tap.
    PointerLeft,
    /// Keyboard rotation step (+1 forward, -1 backward).
    KeyStep(i32),
}
