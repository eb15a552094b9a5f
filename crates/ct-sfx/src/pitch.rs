//! Fixed pitch-to-frequency lookup.
//!
//! One chromatic table of 64 pitches covering roughly five octaves,
//! tuned to A4 = 440 Hz (index 33).

/// Number of valid pitch indices. A note pitch at or above this is a rest.
pub const PITCH_COUNT: usize = 64;

/// Frequency in Hz for each pitch index.
pub const FREQ_TABLE: [u16; PITCH_COUNT] = [
    65, 69, 73, 78, 82, 87, 92, 98,
    104, 110, 117, 123, 131, 139, 147, 156,
    165, 175, 185, 196, 208, 220, 233, 247,
    262, 277, 294, 311, 330, 349, 370, 392,
    415, 440, 466, 494, 523, 554, 587, 622,
    659, 698, 740, 784, 831, 880, 932, 988,
    1047, 1109, 1175, 1245, 1319, 1397, 1480, 1568,
    1661, 1760, 1865, 1976, 2093, 2217, 2349, 2489,
];

/// Look up the frequency for a pitch index.
///
/// Returns `None` for out-of-range pitches, which the engine treats as
/// a rest rather than an error.
pub fn pitch_to_freq(pitch: u8) -> Option<u16> {
    FREQ_TABLE.get(pitch as usize).copied()
}
