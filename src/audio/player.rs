use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::{Audio, melody};

/// Audio backend for the terminal build
///
/// There is no sound device behind it: melodies keep their real timing and
/// each note is reported as a trace event. `stop_all` bumps a shared epoch that
/// every playing melody checks between notes.
#[derive(Debug, Clone, Default)]
pub struct TerminalAudio {
    epoch: Arc<AtomicU64>,
}

impl TerminalAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Audio for TerminalAudio {
    async fn play_melody(&self, score: &str, tempo_bpm: u32) {
        let (notes, unit, length) = match melody::parse(score).and_then(|notes| {
            let unit = melody::unit_duration(tempo_bpm)?;
            let length = melody::total_duration(&notes, tempo_bpm)?;
            Ok((notes, unit, length))
        }) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::error!(%err, "cannot play score");
                return;
            }
        };

        let epoch = self.epoch.load(Ordering::SeqCst);
        tracing::debug!(notes = notes.len(), tempo_bpm, ?length, "melody started");
        for note in notes {
            if self.epoch.load(Ordering::SeqCst) != epoch {
                tracing::debug!("melody stopped");
                return;
            }
            tracing::trace!(%note, "note");
            tokio::time::sleep(unit * note.units).await;
        }
        tracing::debug!("melody finished");
    }

    fn play_tone(&self, freq_hz: u32, duration: Duration) {
        tracing::trace!(freq_hz, ?duration, "tone");
    }

    fn stop_all(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tunes::DEATH_MELODY;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_melody_keeps_its_timing() {
        let audio = TerminalAudio::new();
        let start = Instant::now();

        audio.play_melody(DEATH_MELODY, 144).await;

        assert_eq!(start.elapsed(), Duration::from_millis(104 * 27));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_all_cuts_melody_short() {
        let audio = TerminalAudio::new();
        let background = audio.clone();
        let start = Instant::now();

        let handle = tokio::spawn(async move {
            background.play_melody("C4:4 D4:4 E4:4 F4:4", 120).await;
        });
        tokio::time::sleep(Duration::from_millis(600)).await;
        audio.stop_all();
        handle.await.unwrap();

        // Stops at the boundary after the second note instead of running 2s
        assert_eq!(start.elapsed(), Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_score_returns_immediately() {
        let audio = TerminalAudio::new();
        let start = Instant::now();

        audio.play_melody("C4:1 nonsense", 120).await;
        audio.play_melody("C4:1", 0).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
