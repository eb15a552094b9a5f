//! Pitch-to-phase-increment conversion.
//!
//! The oscillators run on a 32-bit phase accumulator whose full range is
//! one waveform period, so the per-sample increment for a frequency is
//! `freq * 2^32 / sample_rate`.

use ct_sfx::pitch_to_freq;

/// Compute the per-sample phase increment for a pitch-table index.
///
/// Returns 0 when the pitch is out of range (a rest) or the sample rate
/// is 0; a zero increment freezes the oscillator.
pub fn pitch_to_increment(pitch: u8, sample_rate: u32) -> u32 {
    if sample_rate == 0 {
        return 0;
    }
    match pitch_to_freq(pitch) {
        Some(freq) => (((freq as u64) << 32) / sample_rate as u64) as u32,
        None => 0,
    }
}
