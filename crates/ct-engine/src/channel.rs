//! Per-voice playback state.
//!
//! A channel walks one sound effect note by note. The sequencer mutates it
//! at frame rate through [`Channel::advance`]; the mixer reads the current
//! parameters and steps the phase accumulator at sample rate.

use ct_sfx::{Sfx, SFX_LENGTH};

use crate::frequency::pitch_to_increment;

/// Sample units of note duration per unit of sequence speed, at the
/// reference sample rate.
pub const UNITS_PER_SPEED_STEP: u32 = 183;

/// Sample rate [`UNITS_PER_SPEED_STEP`] is calibrated for. At other
/// rates the step is scaled so note durations stay the same wall-clock
/// length.
pub const REFERENCE_SAMPLE_RATE: u32 = 22050;

/// Per-speed-step note duration in sample units at the given rate.
fn speed_step_units(sample_rate: u32) -> u32 {
    (UNITS_PER_SPEED_STEP as u64 * sample_rate as u64 / REFERENCE_SAMPLE_RATE as u64) as u32
}

/// State for one playback voice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Channel {
    /// The assigned sequence; `Some` for the whole time the channel is active.
    pub sfx: Option<&'static Sfx>,
    /// Current note position (0-31).
    pub note_index: u8,
    /// Sample units elapsed within the current note.
    pub elapsed_units: u32,
    /// Sample units per note, fixed at assignment from the sequence speed.
    pub units_per_note: u32,
    /// Oscillator phase accumulator; one period per 2^32.
    pub phase: u32,
    /// Per-sample phase delta; 0 while the current note is a rest.
    pub phase_increment: u32,
    /// Current note volume (0-7).
    pub volume: u8,
    /// Current note waveform id (0-7).
    pub waveform: u8,
    /// Does this channel contribute to the mix?
    pub active: bool,
    /// Does the assigned sequence have a valid loop range?
    pub looping: bool,
}

impl Channel {
    /// Create an idle channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a sequence, replacing any prior assignment immediately.
    ///
    /// The channel becomes active only if the first note is audible; an
    /// inaudible opening note leaves the assignment in place but the
    /// voice idle.
    pub fn assign(&mut self, sfx: &'static Sfx, sample_rate: u32) {
        self.sfx = Some(sfx);
        self.note_index = 0;
        self.elapsed_units = 0;
        self.phase = 0;
        // Speed 0 gets the same floor as speed 1
        self.units_per_note = speed_step_units(sample_rate) * sfx.speed.max(1) as u32;
        // A loop end past the sequence tail can never be reached; treat it
        // as no loop rather than risking an out-of-range wrap target.
        self.looping = sfx.has_loop() && (sfx.loop_end as usize) <= SFX_LENGTH;
        self.load_note(0, sample_rate);
        self.active = sfx.notes[0].is_audible();
    }

    /// Deactivate the voice, leaving the rest of the state untouched.
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Advance the note clock by `delta_units` sample units.
    ///
    /// Steps to the next note when the current one has run its course,
    /// wrapping at the loop end or deactivating past the final note.
    pub fn advance(&mut self, delta_units: u32, sample_rate: u32) {
        let Some(sfx) = self.sfx else { return };
        if !self.active {
            return;
        }

        self.elapsed_units += delta_units;
        if self.elapsed_units < self.units_per_note {
            return;
        }
        self.elapsed_units = 0;
        self.note_index += 1;

        if self.looping && self.note_index >= sfx.loop_end {
            self.note_index = sfx.loop_start;
        } else if self.note_index as usize >= SFX_LENGTH {
            self.active = false;
            return;
        }
        self.load_note(self.note_index, sample_rate);
    }

    /// Does the voice currently feed the mixer? Rests stay active but
    /// contribute nothing.
    pub fn is_audible(&self) -> bool {
        self.active && self.volume > 0 && self.phase_increment > 0
    }

    /// Load a note's parameters. Rests (zero volume or an out-of-range
    /// pitch) zero the increment so the oscillator freezes in place.
    fn load_note(&mut self, index: u8, sample_rate: u32) {
        // Caller keeps index in range; an assigned sfx is always present.
        let Some(sfx) = self.sfx else { return };
        let note = sfx.notes[index as usize];
        self.waveform = note.waveform;
        self.volume = note.volume;
        self.phase_increment = if note.is_audible() {
            pitch_to_increment(note.pitch, sample_rate)
        } else {
            0
        };
    }
}
