//! Core game logic module for Snake
//!
//! This module contains the game state and movement rules without any I/O or
//! rendering dependencies. Display, audio and timing live with the game loop.

pub mod action;
pub mod config;
pub mod engine;
pub mod random;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Turn};
pub use config::PresentationConfig;
pub use engine::{GameEngine, StepInfo, StepResult, Transition};
pub use random::RandomSource;
pub use state::{Cell, CollisionType, GameState, Snake};
