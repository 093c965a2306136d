pub mod handler;

pub use handler::{Gesture, InputHandler, KeyAction};
