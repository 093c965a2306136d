//! Score notation used by the melodies
//!
//! A score is a space-separated list of tokens. `<Note><Octave>:<Units>` plays a
//! pitch, e.g. `A#3:2` or `Eb4:1`; `R:<Units>` is a rest. One unit is a quarter
//! of a beat at the playback tempo.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading a score
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MelodyError {
    #[error("token `{0}` has no `:<units>` duration")]
    MissingDuration(String),
    #[error("token `{0}` has an invalid duration")]
    InvalidDuration(String),
    #[error("token `{0}` is not a note name")]
    InvalidNote(String),
    #[error("tempo must be positive")]
    ZeroTempo,
}

/// A pitch in scientific notation, stored as a MIDI note number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    midi: u8,
}

impl Pitch {
    /// Parse a name such as `C4`, `A#3` or `Eb5`
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        let semitone: i32 = match chars.next()?.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };
        let rest = chars.as_str();
        let (accidental, octave) = match rest.as_bytes().first()? {
            b'#' => (1, &rest[1..]),
            b'b' => (-1, &rest[1..]),
            _ => (0, rest),
        };
        let octave: i32 = octave.parse().ok()?;
        if !(0..=8).contains(&octave) {
            return None;
        }
        let midi = (octave + 1) * 12 + semitone + accidental;
        u8::try_from(midi).ok().map(|midi| Self { midi })
    }

    /// Equal-temperament frequency with A4 at 440 Hz
    pub fn frequency_hz(self) -> f32 {
        440.0 * 2f32.powf((f32::from(self.midi) - 69.0) / 12.0)
    }

    #[cfg(test)]
    pub fn midi(self) -> u8 {
        self.midi
    }
}

/// One score token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    /// `None` for a rest
    pub pitch: Option<Pitch>,
    /// Length in quarter beats
    pub units: u32,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pitch {
            Some(pitch) => write!(f, "{:.0}Hz:{}", pitch.frequency_hz(), self.units),
            None => write!(f, "R:{}", self.units),
        }
    }
}

/// Parse a whole score
pub fn parse(score: &str) -> Result<Vec<Note>, MelodyError> {
    score.split_whitespace().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<Note, MelodyError> {
    let (name, units) = token
        .split_once(':')
        .ok_or_else(|| MelodyError::MissingDuration(token.to_string()))?;
    let units: u32 = units
        .parse()
        .map_err(|_| MelodyError::InvalidDuration(token.to_string()))?;
    if units == 0 {
        return Err(MelodyError::InvalidDuration(token.to_string()));
    }

    let pitch = if name.eq_ignore_ascii_case("R") {
        None
    } else {
        Some(Pitch::parse(name).ok_or_else(|| MelodyError::InvalidNote(token.to_string()))?)
    };

    Ok(Note { pitch, units })
}

/// Length of one unit at a tempo
pub fn unit_duration(tempo_bpm: u32) -> Result<Duration, MelodyError> {
    if tempo_bpm == 0 {
        return Err(MelodyError::ZeroTempo);
    }
    Ok(Duration::from_millis(60_000 / u64::from(tempo_bpm) / 4))
}

/// Total playing time of parsed notes
pub fn total_duration(notes: &[Note], tempo_bpm: u32) -> Result<Duration, MelodyError> {
    let unit = unit_duration(tempo_bpm)?;
    Ok(notes.iter().map(|note| unit * note.units).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tunes::{DEATH_MELODY, VICTORY_MELODY};

    #[test]
    fn test_reference_pitches() {
        let a4 = Pitch::parse("A4").unwrap();
        assert_eq!(a4.midi(), 69);
        assert!((a4.frequency_hz() - 440.0).abs() < 0.01);

        let c4 = Pitch::parse("C4").unwrap();
        assert_eq!(c4.midi(), 60);
        assert!((c4.frequency_hz() - 261.63).abs() < 0.05);
    }

    #[test]
    fn test_accidentals() {
        assert_eq!(Pitch::parse("A#3").unwrap().midi(), 58);
        assert_eq!(Pitch::parse("Bb3").unwrap().midi(), 58);
        assert_eq!(Pitch::parse("D#6").unwrap().midi(), 87);
    }

    #[test]
    fn test_bad_note_names() {
        assert!(Pitch::parse("H4").is_none());
        assert!(Pitch::parse("C").is_none());
        assert!(Pitch::parse("C9").is_none());
        assert!(Pitch::parse("").is_none());
    }

    #[test]
    fn test_parse_tokens() {
        let notes = parse("D4:2 R:1 A#3:4").unwrap();
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].units, 2);
        assert_eq!(notes[1].pitch, None);
        assert_eq!(notes[2].pitch, Pitch::parse("A#3"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse("C4"),
            Err(MelodyError::MissingDuration("C4".to_string()))
        );
        assert_eq!(
            parse("C4:x"),
            Err(MelodyError::InvalidDuration("C4:x".to_string()))
        );
        assert_eq!(
            parse("C4:0"),
            Err(MelodyError::InvalidDuration("C4:0".to_string()))
        );
        assert_eq!(
            parse("Q4:1"),
            Err(MelodyError::InvalidNote("Q4:1".to_string()))
        );
    }

    #[test]
    fn test_unit_duration() {
        assert_eq!(unit_duration(120).unwrap(), Duration::from_millis(125));
        assert_eq!(unit_duration(144).unwrap(), Duration::from_millis(104));
        assert_eq!(unit_duration(0), Err(MelodyError::ZeroTempo));
    }

    #[test]
    fn test_shipped_tunes_parse() {
        let death = parse(DEATH_MELODY).unwrap();
        assert_eq!(death.len(), 11);
        assert_eq!(
            total_duration(&death, 144).unwrap(),
            Duration::from_millis(104 * 27)
        );

        let victory = parse(VICTORY_MELODY).unwrap();
        assert!(victory.len() > 100);
    }

    #[test]
    fn test_note_display() {
        let notes = parse("A4:2 R:3").unwrap();
        assert_eq!(notes[0].to_string(), "440Hz:2");
        assert_eq!(notes[1].to_string(), "R:3");
    }
}
