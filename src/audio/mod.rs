//! Audio collaborator: melodies, tones and the scores the game ships with

pub mod melody;
pub mod player;
pub mod tunes;

use std::future::Future;
use std::time::Duration;

pub use melody::{MelodyError, Note, Pitch};
pub use player::TerminalAudio;

/// Sound output used by the game loop
///
/// Handles are cloned into background tasks, so implementations share their
/// device state between clones.
pub trait Audio: Clone + Send + Sync + 'static {
    /// Play a score to the end; resolves early if `stop_all` is called
    fn play_melody(&self, score: &str, tempo_bpm: u32) -> impl Future<Output = ()> + Send;

    /// Start a short tone without waiting for it
    fn play_tone(&self, freq_hz: u32, duration: Duration);

    /// Silence everything that is playing
    fn stop_all(&self);
}
