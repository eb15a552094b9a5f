//! Waveform oscillator bank.
//!
//! Seven stateless shape functions over a 32-bit phase accumulator plus a
//! 16-bit LFSR noise source. The waveform position is the top 16 bits of
//! the accumulator; outputs are unsigned 8-bit samples centered at 128.

/// Waveform id for the LFSR noise source, which needs shared state and is
/// evaluated separately from the stateless shapes.
pub const WAVEFORM_NOISE: u8 = 6;

/// Position within one period: top 16 bits of the accumulator.
#[inline]
fn pos(phase: u32) -> u16 {
    (phase >> 16) as u16
}

/// Triangle: 0..255 over the first half period, 255..0 over the second.
#[inline]
pub fn triangle(phase: u32) -> u8 {
    let p = pos(phase);
    if p < 0x8000 {
        (p >> 7) as u8
    } else {
        ((0xFFFF - p) >> 7) as u8
    }
}

/// Saw: linear ramp 0..255 over the full period.
#[inline]
pub fn saw(phase: u32) -> u8 {
    (pos(phase) >> 8) as u8
}

/// Square, 50% duty.
#[inline]
pub fn square(phase: u32) -> u8 {
    if pos(phase) < 0x8000 {
        255
    } else {
        0
    }
}

/// Narrow pulse, 25% duty.
#[inline]
pub fn pulse(phase: u32) -> u8 {
    if pos(phase) < 0x4000 {
        255
    } else {
        0
    }
}

/// Organ: mean of a square at the fundamental and one at double frequency.
#[inline]
pub fn organ(phase: u32) -> u8 {
    let a = square(phase) as u16;
    let b = square(phase.wrapping_shl(1)) as u16;
    ((a + b) / 2) as u8
}

/// Phaser: mean of two saws, one shifted by an eighth of a period.
#[inline]
pub fn phaser(phase: u32) -> u8 {
    let a = saw(phase) as u16;
    let b = saw(phase.wrapping_add(1 << 29)) as u16;
    ((a + b) / 2) as u8
}

/// Evaluate a stateless waveform by id.
///
/// The noise id (6) has per-sample state and is handled by the mixer; here
/// it falls through to the centerline, as does any id outside 0-7.
pub fn amplitude(waveform: u8, phase: u32) -> u8 {
    match waveform {
        0 => triangle(phase),
        // Tilted saw approximated by the plain ramp, kept as a distinct id
        1 => saw(phase),
        2 => saw(phase),
        3 => square(phase),
        4 => pulse(phase),
        5 => organ(phase),
        7 => phaser(phase),
        _ => 128,
    }
}

/// 16-bit linear-feedback shift register noise source.
///
/// Taps at bits 0, 2, 3 and 5; the low byte is the output sample. One
/// instance is shared by all channels and stepped once per output sample,
/// so simultaneous noise voices hear the same value within a sample.
#[derive(Clone, Debug)]
pub struct Noise {
    lfsr: u16,
}

/// Power-on LFSR seed.
const NOISE_SEED: u16 = 0xACE1;

impl Noise {
    /// Create a noise source with the power-on seed.
    pub fn new() -> Self {
        Self::with_seed(NOISE_SEED)
    }

    /// Create a noise source with a specific seed.
    pub fn with_seed(seed: u16) -> Self {
        Self { lfsr: seed }
    }

    /// Step the register and return the next sample.
    pub fn next(&mut self) -> u8 {
        let l = self.lfsr;
        let bit = (l ^ (l >> 2) ^ (l >> 3) ^ (l >> 5)) & 1;
        self.lfsr = (l >> 1) | (bit << 15);
        (self.lfsr & 0xFF) as u8
    }
}

impl Default for Noise {
    fn default() -> Self {
        Self::new()
    }
}
