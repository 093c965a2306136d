//! Display collaborator and its terminal implementation

pub mod matrix;
pub mod renderer;
pub mod terminal;

use std::future::Future;

use anyhow::Result;

use crate::game::{Cell, GameState};
use crate::metrics::GameMetrics;

pub use matrix::{Icon, LedMatrix};
pub use renderer::{Renderer, Scoreboard};
pub use terminal::TerminalDisplay;

/// The 5x5 LED matrix as seen by the game loop
///
/// Drawing calls only touch the pending image; `flush` makes it visible.
pub trait Display {
    fn clear(&mut self);

    fn plot_brightness(&mut self, cell: Cell, level: u8);

    fn show_icon(&mut self, icon: Icon);

    /// Scroll text across the display, resolving once it has left the screen
    fn scroll_text(&mut self, text: &str) -> impl Future<Output = Result<()>>;

    /// Session numbers shown next to the matrix, if the display has room
    fn show_status(&mut self, _state: &GameState, _metrics: &GameMetrics) {}

    fn flush(&mut self) -> Result<()>;
}
