//! Full-screen single-project viewer: a phase-based state machine with
//! its own gesture interpreters for image paging and detail reveal.

pub mod gestures;
pub mod messages;
pub mod state;
pub mod update;
pub mod view;

pub use gestures::{GestureOutcome, ViewerKey};
pub use messages::Message;
pub use state::{DetailViewer, ViewerPhase};
