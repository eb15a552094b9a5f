//! A single step in a sound-effect sequence.

use crate::pitch::PITCH_COUNT;

/// One note in a sequence: pitch, waveform, volume, and effect id.
///
/// The effect field is carried through unmodified; the engine does not
/// interpret it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Note {
    /// Pitch-table index (0-63); values >= 64 are treated as a rest.
    pub pitch: u8,
    /// Waveform id (0-7).
    pub waveform: u8,
    /// Volume (0-7); 0 is a rest.
    pub volume: u8,
    /// Effect id (reserved).
    pub effect: u8,
}

impl Note {
    /// Create a note.
    pub const fn new(pitch: u8, waveform: u8, volume: u8, effect: u8) -> Self {
        Self {
            pitch,
            waveform,
            volume,
            effect,
        }
    }

    /// Does this note name a pitch inside the frequency table?
    pub const fn has_valid_pitch(&self) -> bool {
        (self.pitch as usize) < PITCH_COUNT
    }

    /// A rest contributes silence: zero volume or no valid pitch.
    pub const fn is_rest(&self) -> bool {
        self.volume == 0 || !self.has_valid_pitch()
    }

    /// Audible means the engine will derive a nonzero phase increment.
    pub const fn is_audible(&self) -> bool {
        !self.is_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_volume_is_rest() {
        let n = Note::new(12, 0, 0, 0);
        assert!(n.is_rest());
        assert!(!n.is_audible());
    }

    #[test]
    fn out_of_range_pitch_is_rest() {
        let n = Note::new(64, 0, 7, 0);
        assert!(!n.has_valid_pitch());
        assert!(n.is_rest());
    }

    #[test]
    fn valid_pitch_with_volume_is_audible() {
        let n = Note::new(33, 2, 5, 0);
        assert!(n.is_audible());
    }
}
