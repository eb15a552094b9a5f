//! Built-in sound-effect library.
//!
//! Eight sequences extracted from the Hyperspace cartridge. This is the
//! entire catalog; ids index directly into [`LIBRARY`].

use crate::note::Note;
use crate::sfx::Sfx;

/// Number of library entries.
pub const LIBRARY_SIZE: usize = 8;

/// Shorthand for table construction; the effect field is 0 throughout.
const fn n(pitch: u8, waveform: u8, volume: u8) -> Note {
    Note::new(pitch, waveform, volume, 0)
}

/// The built-in sound-effect catalog.
pub static LIBRARY: [Sfx; LIBRARY_SIZE] = [
    // 0: laser fire (descending saw)
    Sfx::new(
        "laser",
        1,
        0,
        13,
        [
            n(50, 2, 3), n(51, 2, 3), n(51, 2, 3), n(49, 2, 1),
            n(46, 2, 3), n(41, 2, 3), n(36, 2, 4), n(34, 2, 3),
            n(32, 2, 3), n(29, 2, 3), n(28, 2, 3), n(28, 2, 2),
            n(28, 2, 1), n(28, 2, 0), n(28, 0, 0), n(0, 0, 0),
            n(50, 4, 0), n(52, 4, 0), n(52, 4, 0), n(49, 4, 0),
            n(46, 4, 0), n(41, 4, 0), n(36, 4, 0), n(34, 4, 0),
            n(32, 4, 0), n(29, 4, 0), n(28, 4, 0), n(28, 4, 0),
            n(28, 4, 0), n(1, 4, 0), n(1, 4, 0), n(1, 4, 0),
        ],
    ),
    // 1: player damage / barrel roll
    Sfx::new(
        "damage",
        5,
        0,
        0,
        [
            n(36, 6, 7), n(36, 6, 7), n(39, 6, 7), n(42, 6, 7),
            n(49, 6, 7), n(56, 6, 7), n(63, 6, 7), n(63, 6, 7),
            n(48, 6, 7), n(41, 6, 7), n(36, 6, 7), n(32, 6, 7),
            n(30, 6, 6), n(28, 6, 6), n(27, 6, 5), n(26, 6, 5),
            n(25, 6, 4), n(25, 6, 4), n(24, 6, 3), n(25, 6, 3),
            n(26, 6, 2), n(28, 6, 2), n(32, 6, 1), n(35, 6, 1),
            n(10, 6, 0), n(11, 6, 0), n(13, 6, 0), n(16, 6, 0),
            n(18, 6, 0), n(20, 6, 0), n(23, 6, 0), n(24, 6, 0),
        ],
    ),
    // 2: enemy hit / explosion
    Sfx::new(
        "explosion",
        3,
        0,
        0,
        [
            n(45, 6, 7), n(41, 4, 7), n(36, 4, 7), n(25, 6, 7),
            n(30, 4, 7), n(32, 6, 7), n(29, 6, 7), n(13, 6, 7),
            n(22, 6, 7), n(20, 4, 7), n(16, 4, 7), n(15, 4, 7),
            n(19, 6, 7), n(11, 4, 7), n(9, 4, 7), n(7, 6, 6),
            n(7, 4, 5), n(5, 4, 4), n(8, 6, 3), n(2, 4, 2),
            n(1, 4, 1), n(12, 6, 0), n(5, 6, 0), n(1, 6, 0),
            n(1, 6, 0), n(1, 6, 0), n(3, 6, 0), n(1, 6, 0),
            n(2, 6, 0), n(1, 6, 0), n(1, 6, 0), n(0, 0, 0),
        ],
    ),
    // 3: jingle (unused by the game)
    Sfx::new(
        "jingle",
        1,
        0,
        0,
        [
            n(60, 3, 7), n(60, 0, 7), n(55, 1, 7), n(57, 0, 7),
            n(54, 0, 7), n(51, 0, 7), n(47, 1, 7), n(48, 0, 7),
            n(41, 0, 7), n(34, 0, 7), n(32, 0, 7), n(27, 0, 7),
            n(23, 0, 7), n(29, 1, 7), n(20, 0, 7), n(19, 0, 7),
            n(18, 0, 7), n(18, 0, 7), n(19, 0, 7), n(21, 0, 7),
            n(18, 1, 7), n(23, 0, 7), n(18, 1, 7), n(30, 0, 7),
            n(39, 0, 7), n(44, 0, 7), n(53, 0, 7), n(54, 0, 7),
            n(28, 1, 7), n(33, 1, 7), n(46, 1, 7), n(0, 0, 0),
        ],
    ),
    // 4: blip (unused by the game)
    Sfx::new(
        "blip",
        1,
        0,
        13,
        [
            n(44, 4, 4), n(18, 0, 4), n(1, 0, 2), n(16, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
        ],
    ),
    // 5: bonus pickup
    Sfx::new(
        "pickup",
        1,
        0,
        0,
        [
            n(44, 4, 7), n(40, 4, 7), n(35, 4, 7), n(32, 4, 7),
            n(28, 4, 7), n(26, 4, 7), n(23, 4, 6), n(21, 4, 4),
            n(21, 4, 2), n(20, 4, 0), n(22, 4, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
        ],
    ),
    // 6: boss spawn (slow triangle pad)
    Sfx::new(
        "boss-spawn",
        24,
        0,
        0,
        [
            n(0, 0, 0), n(7, 3, 6), n(20, 1, 4), n(7, 3, 6),
            n(20, 1, 4), n(26, 3, 7), n(20, 1, 4), n(27, 3, 7),
            n(1, 4, 4), n(23, 3, 7), n(23, 3, 7), n(23, 3, 7),
            n(23, 3, 7), n(23, 3, 6), n(23, 3, 5), n(23, 3, 0),
            n(1, 4, 0), n(1, 4, 0), n(23, 3, 0), n(11, 4, 0),
            n(23, 0, 0), n(23, 0, 0), n(23, 0, 0), n(23, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
            n(0, 0, 0), n(0, 0, 0), n(0, 0, 0), n(0, 0, 0),
        ],
    ),
    // 7: boss damage
    Sfx::new(
        "boss-damage",
        32,
        0,
        0,
        [
            n(13, 2, 7), n(13, 2, 7), n(8, 2, 7), n(8, 2, 7),
            n(4, 2, 7), n(4, 2, 7), n(1, 2, 7), n(1, 2, 7),
            n(1, 2, 7), n(1, 2, 7), n(1, 2, 7), n(1, 2, 7),
            n(18, 0, 0), n(18, 0, 0), n(18, 0, 0), n(18, 0, 0),
            n(19, 0, 0), n(20, 0, 0), n(50, 0, 2), n(20, 0, 0),
            n(20, 0, 0), n(52, 0, 4), n(68, 0, 4), n(82, 0, 4),
            n(118, 0, 5), n(82, 0, 4), n(102, 0, 4), n(82, 0, 4),
            n(82, 0, 4), n(82, 0, 4), n(1, 0, 4), n(0, 0, 0),
        ],
    ),
];

/// Look up a library entry by id. Out-of-range ids return `None`.
pub fn get(id: usize) -> Option<&'static Sfx> {
    LIBRARY.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_has_eight_entries() {
        assert_eq!(LIBRARY.len(), LIBRARY_SIZE);
        assert!(get(7).is_some());
        assert!(get(8).is_none());
    }

    #[test]
    fn laser_loops_damage_does_not() {
        assert!(get(0).unwrap().has_loop());
        assert!(!get(1).unwrap().has_loop());
    }

    #[test]
    fn laser_first_note_is_audible_saw() {
        let note = get(0).unwrap().notes[0];
        assert_eq!(note.pitch, 50);
        assert_eq!(note.waveform, 2);
        assert_eq!(note.volume, 3);
        assert!(note.is_audible());
    }

    #[test]
    fn boss_spawn_starts_with_a_rest() {
        assert!(get(6).unwrap().notes[0].is_rest());
    }

    #[test]
    fn boss_damage_carries_out_of_range_pitches() {
        // The source cartridge encodes pitches past the table here; they
        // must survive as data and read back as rests.
        let sfx = get(7).unwrap();
        assert!(sfx.notes.iter().any(|note| !note.has_valid_pitch()));
    }

    #[test]
    fn every_entry_stays_within_field_ranges() {
        for sfx in &LIBRARY {
            assert!(sfx.speed >= 1);
            for note in &sfx.notes {
                assert!(note.waveform < 8, "{}: waveform {}", sfx.name, note.waveform);
                assert!(note.volume < 8, "{}: volume {}", sfx.name, note.volume);
            }
        }
    }
}
