//! LED Snake - snake on a 5x5 LED matrix, steered with two buttons
//!
//! This library provides:
//! - Core game logic (game module)
//! - Display and audio collaborators with terminal implementations
//!   (render and audio modules)
//! - Button mapping (input module)
//! - The game loop and interactive play (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
