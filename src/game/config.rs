use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Width of the LED matrix
pub const GRID_WIDTH: usize = 5;
/// Height of the LED matrix
pub const GRID_HEIGHT: usize = 5;
/// Upper bound on snake length: every cell of the grid
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Starting body, head first
pub const INITIAL_SNAKE: [(i32, i32); 3] = [(2, 2), (1, 2), (0, 2)];

/// Tick interval at the start of every life
pub const INITIAL_TICK_MS: u32 = 700;
/// The tick interval never drops below this
pub const MIN_TICK_MS: u32 = 300;
/// Speed-up per food, as a percentage of the current interval
pub const TICK_DECAY_PERCENT: u32 = 80;

/// Length at which the current life is won
pub const WIN_LENGTH: usize = 9;

/// Settings for the greeting, the terminal sequences and the collection cue
///
/// None of these change gameplay; they only shape what is shown and heard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Scroll the greeting once at startup
    pub show_greeting: bool,
    /// Text scrolled at startup
    pub greeting: String,
    /// Text scrolled while the victory tune plays
    pub victory_text: String,

    /// Tempo of the death motif
    pub death_tempo_bpm: u32,
    /// Tempo of the victory tune
    pub victory_tempo_bpm: u32,

    /// How long the skull stays up after the death motif ends
    pub death_hold_ms: u64,
    /// How long the happy face stays up after the victory text
    pub victory_hold_ms: u64,
    /// Time each scroll position is shown
    pub scroll_step_ms: u64,

    /// Pitch of the food collection cue
    pub collect_tone_hz: u32,
    /// Length of the food collection cue
    pub collect_tone_ms: u64,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            show_greeting: true,
            greeting: "Hi Zhi!".to_string(),
            victory_text: "PhD! Dr. Zhi! PhD! Dr. Zhi! PhD! Dr. Zhi! PhD! Dr. Zhi!".to_string(),
            death_tempo_bpm: 144,
            victory_tempo_bpm: 120,
            death_hold_ms: 400,
            victory_hold_ms: 300,
            scroll_step_ms: 120,
            collect_tone_hz: 988,
            collect_tone_ms: 125,
        }
    }
}

impl PresentationConfig {
    /// Load settings from a JSON file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid config: {}", path.display()))
    }

    /// Parse settings from a JSON document
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
