//! The spiral gallery domain: card content, per-frame layout, and the
//! pointer/hover/tap interaction handlers.

pub mod messages;
pub mod state;
pub mod update;
pub mod view;

pub use messages::Message;
pub use state::{CardSource, GalleryState};
