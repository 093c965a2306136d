use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stderr;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};

use super::game_loop::GameLoop;
use crate::audio::TerminalAudio;
use crate::game::{GameEngine, PresentationConfig};
use crate::input::{Gesture, InputHandler, KeyAction};
use crate::render::TerminalDisplay;

/// Interactive play in the terminal
pub struct PlayMode {
    presentation: PresentationConfig,
    seed: Option<u64>,
}

impl PlayMode {
    pub fn new(presentation: PresentationConfig, seed: Option<u64>) -> Self {
        Self { presentation, seed }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_session(terminal).await;

        // Cleanup terminal
        cleanup_terminal()?;

        result
    }

    async fn run_session(
        &mut self,
        terminal: Terminal<CrosstermBackend<std::io::Stderr>>,
    ) -> Result<()> {
        let display = TerminalDisplay::new(
            terminal,
            Duration::from_millis(self.presentation.scroll_step_ms),
        );
        let engine = GameEngine::from_seed(self.seed);
        let mut game_loop = GameLoop::new(
            engine,
            display,
            TerminalAudio::new(),
            self.presentation.clone(),
        );

        let (tx, rx) = mpsc::unbounded_channel();
        tracing::info!(seed = ?self.seed, "session started");

        tokio::select! {
            result = game_loop.run(rx) => result,
            result = forward_input(tx) => result,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    }
}

/// Turn terminal key presses into gestures until the player quits
async fn forward_input(gestures: UnboundedSender<Gesture>) -> Result<()> {
    let handler = InputHandler::new();
    let mut event_stream = EventStream::new();

    while let Some(event) = event_stream.next().await {
        let event = event.context("Failed to read terminal event")?;
        let Event::Key(key) = event else {
            continue;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handler.handle_key_event(key) {
            KeyAction::Gesture(gesture) => {
                if gestures.send(gesture).is_err() {
                    break;
                }
            }
            KeyAction::Quit => {
                tracing::info!("quit requested");
                break;
            }
            KeyAction::None => {}
        }
    }

    Ok(())
}

fn cleanup_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stderr(), LeaveAlternateScreen, Show).context("Failed to leave alternate screen")?;
    Ok(())
}
