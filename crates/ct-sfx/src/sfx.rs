//! Sound-effect sequence type.

use crate::note::Note;

/// Number of notes in every sequence.
pub const SFX_LENGTH: usize = 32;

/// A sound effect: a fixed-length note sequence with tempo and loop markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sfx {
    /// Human-readable name, for tooling only.
    pub name: &'static str,
    /// Tempo scalar; larger values mean longer notes.
    pub speed: u8,
    /// Loop range start (note index).
    pub loop_start: u8,
    /// Loop range end (note index, exclusive).
    pub loop_end: u8,
    /// The note sequence.
    pub notes: [Note; SFX_LENGTH],
}

impl Sfx {
    /// Create a sequence.
    pub const fn new(
        name: &'static str,
        speed: u8,
        loop_start: u8,
        loop_end: u8,
        notes: [Note; SFX_LENGTH],
    ) -> Self {
        Self {
            name,
            speed,
            loop_start,
            loop_end,
            notes,
        }
    }

    /// A sequence loops when its loop range is non-empty.
    pub const fn has_loop(&self) -> bool {
        self.loop_end > self.loop_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_loop_range_does_not_loop() {
        let s = Sfx::new("t", 1, 0, 0, [Note::new(0, 0, 0, 0); SFX_LENGTH]);
        assert!(!s.has_loop());
    }

    #[test]
    fn forward_loop_range_loops() {
        let s = Sfx::new("t", 1, 0, 13, [Note::new(0, 0, 0, 0); SFX_LENGTH]);
        assert!(s.has_loop());
    }

    #[test]
    fn inverted_loop_range_does_not_loop() {
        let s = Sfx::new("t", 1, 13, 2, [Note::new(0, 0, 0, 0); SFX_LENGTH]);
        assert!(!s.has_loop());
    }
}
