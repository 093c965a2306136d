//! The periodic game loop
//!
//! Steps the snake on every tick, redraws, and runs the death and victory
//! sequences. Gestures arrive over a channel; while a sequence is presented the
//! channel is left alone, and whatever queued up is settled in the presenting
//! phase right before the reset that ends it.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Instant, sleep, sleep_until};

use crate::audio::Audio;
use crate::audio::tunes::{DEATH_MELODY, VICTORY_MELODY};
use crate::game::{
    CollisionType, GameEngine, GameState, PresentationConfig, RandomSource, Transition,
};
use crate::input::Gesture;
use crate::metrics::GameMetrics;
use crate::render::{Display, Icon};

pub const HEAD_BRIGHTNESS: u8 = 255;
pub const BODY_BRIGHTNESS: u8 = 90;
pub const FOOD_BRIGHT: u8 = 180;
pub const FOOD_DIM: u8 = 120;

/// How a life ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Dead(CollisionType),
    Won,
}

/// Where the loop is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// A terminal sequence is running; left when it completes
    Presenting(Ending),
}

pub struct GameLoop<D, A, R> {
    engine: GameEngine<R>,
    state: GameState,
    display: D,
    audio: A,
    presentation: PresentationConfig,
    metrics: GameMetrics,
    phase: Phase,
}

impl<D: Display, A: Audio, R: RandomSource> GameLoop<D, A, R> {
    pub fn new(
        mut engine: GameEngine<R>,
        display: D,
        audio: A,
        presentation: PresentationConfig,
    ) -> Self {
        let state = engine.reset();
        Self {
            engine,
            state,
            display,
            audio,
            presentation,
            metrics: GameMetrics::new(),
            phase: Phase::Playing,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn metrics(&self) -> &GameMetrics {
        &self.metrics
    }

    #[cfg(test)]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run until the gesture channel closes
    pub async fn run(&mut self, mut gestures: UnboundedReceiver<Gesture>) -> Result<()> {
        if self.presentation.show_greeting {
            self.display.scroll_text(&self.presentation.greeting).await?;
        }
        self.draw()?;

        loop {
            if let Some(ending) = self.tick()? {
                self.present(ending, &mut gestures).await?;
            }

            let deadline = Instant::now() + self.state.tick_interval();
            if !self.idle_until(deadline, &mut gestures).await? {
                tracing::info!("input closed, leaving game loop");
                return Ok(());
            }
        }
    }

    /// One step of the snake; returns how the life ended, if it did
    pub fn tick(&mut self) -> Result<Option<Ending>> {
        let result = self.engine.step(&mut self.state);

        if result.info.ate_food {
            self.audio.play_tone(
                self.presentation.collect_tone_hz,
                Duration::from_millis(self.presentation.collect_tone_ms),
            );
        }

        match result.transition {
            Transition::Continue => {
                self.draw()?;
                Ok(None)
            }
            Transition::Dead => {
                let collision = result.info.collision_type.unwrap_or(CollisionType::Wall);
                Ok(Some(Ending::Dead(collision)))
            }
            Transition::Won => Ok(Some(Ending::Won)),
            Transition::Halted => Ok(None),
        }
    }

    /// Run the sequence for `ending`, then start a new life
    ///
    /// Gestures queued while the sequence ran are settled before the reset,
    /// still in the presenting phase.
    pub async fn present(
        &mut self,
        ending: Ending,
        gestures: &mut UnboundedReceiver<Gesture>,
    ) -> Result<()> {
        self.phase = Phase::Presenting(ending);
        let length = self.state.snake.len();

        match ending {
            Ending::Dead(collision) => {
                tracing::info!(?collision, length, "snake died");
                self.metrics.on_death(length);
                self.present_death().await?;
            }
            Ending::Won => {
                tracing::info!(length, "snake won");
                self.metrics.on_win(length);
                self.present_victory().await?;
            }
        }

        while let Ok(gesture) = gestures.try_recv() {
            self.handle_gesture(gesture)?;
        }

        self.state = self.engine.reset();
        self.metrics.on_life_start();
        self.phase = Phase::Playing;
        self.draw()
    }

    async fn present_death(&mut self) -> Result<()> {
        self.audio.stop_all();
        self.display.show_icon(Icon::Skull);
        self.display.flush()?;

        self.audio
            .play_melody(DEATH_MELODY, self.presentation.death_tempo_bpm)
            .await;
        sleep(Duration::from_millis(self.presentation.death_hold_ms)).await;

        self.display.clear();
        self.display.flush()
    }

    async fn present_victory(&mut self) -> Result<()> {
        self.audio.stop_all();

        // Fire and forget: nothing waits on the tune, stop_all is the only way to end it early
        let audio = self.audio.clone();
        let tempo = self.presentation.victory_tempo_bpm;
        tokio::spawn(async move {
            audio.play_melody(VICTORY_MELODY, tempo).await;
        });

        self.display.scroll_text(&self.presentation.victory_text).await?;
        self.display.show_icon(Icon::Happy);
        self.display.flush()?;
        sleep(Duration::from_millis(self.presentation.victory_hold_ms)).await;

        self.display.clear();
        self.display.flush()?;
        self.audio.stop_all();
        Ok(())
    }

    /// Apply gestures until `deadline`; false once the channel has closed
    async fn idle_until(
        &mut self,
        deadline: Instant,
        gestures: &mut UnboundedReceiver<Gesture>,
    ) -> Result<bool> {
        let wake = sleep_until(deadline);
        tokio::pin!(wake);

        // Input already queued when the deadline passes belongs to the coming step
        loop {
            tokio::select! {
                biased;
                gesture = gestures.recv() => match gesture {
                    Some(gesture) => self.handle_gesture(gesture)?,
                    None => return Ok(false),
                },
                _ = &mut wake => return Ok(true),
            }
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture) -> Result<()> {
        if let Phase::Presenting(ending) = self.phase {
            // The reset closing the presentation absorbs a restart, and turns
            // would only steer the finished life
            tracing::debug!(?gesture, ?ending, "gesture settled by presentation reset");
            return Ok(());
        }

        match gesture {
            Gesture::Turn(turn) => {
                self.state.turn(turn);
                tracing::trace!(?turn, direction = ?self.state.direction, "turn");
                Ok(())
            }
            Gesture::Restart => {
                tracing::info!(length = self.state.snake.len(), "restart requested");
                self.metrics.on_restart(self.state.snake.len());
                self.state = self.engine.reset();
                self.draw()
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        self.display.clear();
        for &cell in self.state.snake.body_segments() {
            self.display.plot_brightness(cell, BODY_BRIGHTNESS);
        }
        let head = self.state.snake.head();
        self.display.plot_brightness(head, HEAD_BRIGHTNESS);
        let food_level = if self.state.blink_phase {
            FOOD_BRIGHT
        } else {
            FOOD_DIM
        };
        self.display.plot_brightness(self.state.food, food_level);

        self.metrics.update();
        self.display.show_status(&self.state, &self.metrics);
        self.display.flush()
    }
}
