use std::io::Stderr;
use std::time::Duration;

use anyhow::{Context, Result};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::{Display, Icon, LedMatrix, Renderer, Scoreboard};
use crate::game::{Cell, GameState};
use crate::metrics::GameMetrics;

/// Characters visible at once in the scrolling banner
pub const BANNER_WIDTH: usize = 12;

/// Display drawn with ratatui on stderr
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    renderer: Renderer,
    matrix: LedMatrix,
    banner: Option<String>,
    scoreboard: Scoreboard,
    scroll_step: Duration,
}

impl TerminalDisplay {
    pub fn new(terminal: Terminal<CrosstermBackend<Stderr>>, scroll_step: Duration) -> Self {
        Self {
            terminal,
            renderer: Renderer::new(),
            matrix: LedMatrix::new(),
            banner: None,
            scoreboard: Scoreboard::default(),
            scroll_step,
        }
    }
}

/// Successive banner contents for scrolling `text` in from the right
pub fn scroll_frames(text: &str, width: usize) -> Vec<String> {
    let padding = std::iter::repeat(' ').take(width);
    let chars: Vec<char> = padding
        .clone()
        .chain(text.chars())
        .chain(padding)
        .collect();
    chars
        .windows(width)
        .map(|window| window.iter().collect())
        .collect()
}

impl Display for TerminalDisplay {
    fn clear(&mut self) {
        self.matrix.clear();
        self.banner = None;
    }

    fn plot_brightness(&mut self, cell: Cell, level: u8) {
        self.matrix.set(cell, level);
    }

    fn show_icon(&mut self, icon: Icon) {
        self.banner = None;
        self.matrix.load_icon(icon);
    }

    async fn scroll_text(&mut self, text: &str) -> Result<()> {
        self.matrix.clear();
        for frame in scroll_frames(text, BANNER_WIDTH) {
            self.banner = Some(frame);
            self.flush()?;
            tokio::time::sleep(self.scroll_step).await;
        }
        self.banner = None;
        self.flush()
    }

    fn show_status(&mut self, state: &GameState, metrics: &GameMetrics) {
        self.scoreboard = Scoreboard::capture(state, metrics);
    }

    fn flush(&mut self) -> Result<()> {
        self.terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, &self.matrix, self.banner.as_deref(), &self.scoreboard)
            })
            .context("Failed to draw frame")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_frames_enter_and_leave() {
        let frames = scroll_frames("Hi", 3);
        assert_eq!(frames, vec!["   ", "  H", " Hi", "Hi ", "i  ", "   "]);
    }

    #[test]
    fn test_scroll_frames_empty_text() {
        assert_eq!(scroll_frames("", 2), vec!["  ", "  ", "  "]);
    }
}
