//! The synthesizer context: channel bank, mixer and sequencer.
//!
//! One [`Synth`] owns everything the two clocks touch. The sample clock
//! calls [`Synth::next_sample`] once per sample period; the note clock
//! calls [`Synth::update`] once per host frame. Neither path allocates,
//! blocks, or returns an error: every control call absorbs bad input as
//! a no-op.

use ct_sfx::library;

use crate::channel::Channel;
use crate::oscillator::{self, Noise, WAVEFORM_NOISE};

/// Number of playback voices.
pub const NUM_CHANNELS: usize = 4;

/// Default output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 22050;

/// Nominal host frame rate driving the note clock.
pub const FRAME_RATE: u32 = 60;

/// Output level for silence: the unsigned 8-bit centerline.
pub const SILENCE: u8 = 128;

/// Power-on master volume.
const DEFAULT_MASTER_VOLUME: u8 = 200;

/// A complete software synthesizer instance.
pub struct Synth {
    channels: [Channel; NUM_CHANNELS],
    noise: Noise,
    master_volume: u8,
    sample_rate: u32,
    /// Note-clock units applied per frame: sample_rate / frame_rate.
    units_per_frame: u32,
}

impl Synth {
    /// Create a synthesizer for the given output sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            channels: [Channel::new(); NUM_CHANNELS],
            noise: Noise::new(),
            master_volume: DEFAULT_MASTER_VOLUME,
            sample_rate,
            units_per_frame: sample_rate / FRAME_RATE,
        }
    }

    /// The output sample rate this instance was built for.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Start a library sound effect on a voice.
    ///
    /// Out-of-range sfx or channel ids are silent no-ops. A valid call
    /// replaces whatever the voice was playing, with no fade.
    pub fn play(&mut self, sfx_id: usize, channel: usize) {
        let Some(sfx) = library::get(sfx_id) else { return };
        let Some(ch) = self.channels.get_mut(channel) else { return };
        ch.assign(sfx, self.sample_rate);
    }

    /// Stop one voice. Out-of-range ids are a no-op.
    pub fn stop(&mut self, channel: usize) {
        if let Some(ch) = self.channels.get_mut(channel) {
            ch.stop();
        }
    }

    /// Stop every voice.
    pub fn stop_all(&mut self) {
        for ch in &mut self.channels {
            ch.stop();
        }
    }

    /// Set the master output scalar (0-255, full scale by representation).
    pub fn set_master_volume(&mut self, level: u8) {
        self.master_volume = level;
    }

    /// Current master output scalar.
    pub fn master_volume(&self) -> u8 {
        self.master_volume
    }

    /// Inspect a voice, mainly for tooling and tests.
    pub fn channel(&self, index: usize) -> Option<&Channel> {
        self.channels.get(index)
    }

    /// Is any voice still active?
    pub fn any_active(&self) -> bool {
        self.channels.iter().any(|ch| ch.active)
    }

    /// Note clock: advance sequence positions by one host frame.
    ///
    /// Voices advance in ascending channel order.
    pub fn update(&mut self) {
        for ch in &mut self.channels {
            if ch.active {
                ch.advance(self.units_per_frame, self.sample_rate);
            }
        }
    }

    /// Sample clock: mix one output sample from all audible voices.
    ///
    /// Channels are averaged, not summed, so the headroom does not depend
    /// on how many voices happen to be running. Silence is exactly 128.
    pub fn next_sample(&mut self) -> u8 {
        let Self {
            channels, noise, ..
        } = self;

        let mut mix: i32 = 0;
        let mut contributors: i32 = 0;
        // The LFSR steps once per sample, not once per reading channel;
        // concurrent noise voices share this value.
        let mut noise_sample: Option<u8> = None;

        for ch in channels.iter_mut() {
            if !ch.is_audible() {
                continue;
            }
            let raw = if ch.waveform == WAVEFORM_NOISE {
                *noise_sample.get_or_insert_with(|| noise.next())
            } else {
                oscillator::amplitude(ch.waveform, ch.phase)
            };
            mix += (raw as i32 - 128) * ch.volume as i32 / 7;
            ch.phase = ch.phase.wrapping_add(ch.phase_increment);
            contributors += 1;
        }

        if contributors > 0 {
            mix /= contributors;
        }
        let out = SILENCE as i32 + mix * self.master_volume as i32 / 255;
        out.clamp(0, 255) as u8
    }

    /// Render a block of samples into `out`.
    pub fn render(&mut self, out: &mut [u8]) {
        for sample in out {
            *sample = self.next_sample();
        }
    }
}

impl Default for Synth {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::pitch_to_increment;

    fn synth() -> Synth {
        Synth::new(SAMPLE_RATE)
    }

    /// Capture the observable state of every voice.
    fn snapshot(s: &Synth) -> [(bool, u8, u32, u32); NUM_CHANNELS] {
        core::array::from_fn(|i| {
            let ch = s.channel(i).unwrap();
            (ch.active, ch.note_index, ch.phase, ch.phase_increment)
        })
    }

    #[test]
    fn fresh_synth_outputs_exact_silence() {
        let mut s = synth();
        for _ in 0..64 {
            assert_eq!(s.next_sample(), SILENCE);
        }
    }

    #[test]
    fn play_assigns_library_sequence() {
        let mut s = synth();
        s.play(0, 0);
        let ch = s.channel(0).unwrap();
        assert!(ch.active);
        assert!(ch.looping);
        assert_eq!(ch.note_index, 0);
        assert_eq!(ch.phase_increment, pitch_to_increment(50, SAMPLE_RATE));
    }

    #[test]
    fn one_update_at_note_boundary_advances_to_note_one() {
        // Library sfx 0 runs at speed 1, so one 60 Hz frame (367 units)
        // crosses the 183-unit note boundary.
        let mut s = synth();
        s.play(0, 0);
        s.update();
        let ch = s.channel(0).unwrap();
        assert_eq!(ch.note_index, 1);
        assert_eq!(ch.phase_increment, pitch_to_increment(51, SAMPLE_RATE));
    }

    #[test]
    fn non_looping_sequence_runs_out_and_goes_silent() {
        let mut s = synth();
        s.play(1, 0);
        for _ in 0..400 {
            s.update();
        }
        assert!(!s.channel(0).unwrap().active);
        assert_eq!(s.next_sample(), SILENCE);
    }

    #[test]
    fn looping_sequence_wraps_and_never_deactivates() {
        // Library sfx 0 loops notes 0..13 at one note per frame
        let mut s = synth();
        s.play(0, 0);
        for _ in 0..13 {
            s.update();
        }
        let ch = s.channel(0).unwrap();
        assert!(ch.active);
        assert_eq!(ch.note_index, 0);
        for _ in 0..1000 {
            s.update();
        }
        assert!(s.channel(0).unwrap().active);
    }

    #[test]
    fn first_mixed_sample_of_laser_matches_hand_computation() {
        // Note 0 of sfx 0: saw at phase 0 -> raw 0; (0-128)*3/7 = -54;
        // one contributor; 128 + -54*200/255 = 86.
        let mut s = synth();
        s.play(0, 0);
        assert_eq!(s.next_sample(), 86);
    }

    #[test]
    fn mixing_advances_phase_by_increment() {
        let mut s = synth();
        s.play(0, 0);
        let inc = s.channel(0).unwrap().phase_increment;
        s.next_sample();
        assert_eq!(s.channel(0).unwrap().phase, inc);
    }

    #[test]
    fn stop_all_silences_every_voice() {
        let mut s = synth();
        s.play(0, 0);
        s.play(1, 1);
        s.play(2, 2);
        s.stop_all();
        assert!(!s.any_active());
        assert_eq!(s.next_sample(), SILENCE);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut s = synth();
        s.play(0, 0);
        s.stop(0);
        let first = snapshot(&s);
        s.stop(0);
        assert_eq!(first, snapshot(&s));
    }

    #[test]
    fn zero_master_volume_pins_output_to_centerline() {
        let mut s = synth();
        s.play(0, 0);
        s.play(1, 1);
        s.set_master_volume(0);
        for _ in 0..256 {
            assert_eq!(s.next_sample(), SILENCE);
        }
    }

    #[test]
    fn out_of_range_control_calls_change_nothing() {
        let mut s = synth();
        s.play(0, 0);
        s.update();
        let before = snapshot(&s);
        s.play(999, 0);
        s.play(0, 99);
        s.stop(99);
        assert_eq!(before, snapshot(&s));
    }

    #[test]
    fn inaudible_opening_note_leaves_channel_idle() {
        // Library sfx 6 opens on a rest
        let mut s = synth();
        s.play(6, 0);
        assert!(!s.channel(0).unwrap().active);
        assert_eq!(s.next_sample(), SILENCE);
    }

    #[test]
    fn replacing_a_voice_restarts_from_note_zero() {
        let mut s = synth();
        s.play(0, 0);
        for _ in 0..5 {
            s.update();
        }
        s.play(2, 0);
        let ch = s.channel(0).unwrap();
        assert_eq!(ch.note_index, 0);
        assert_eq!(ch.phase, 0);
        assert!(!ch.looping);
    }

    #[test]
    fn note_clock_is_sample_rate_invariant() {
        // One second of 60 Hz frames must land both players on the same
        // note regardless of the device rate.
        let mut reference = Synth::new(SAMPLE_RATE);
        let mut high_rate = Synth::new(2 * SAMPLE_RATE);
        reference.play(1, 0);
        high_rate.play(1, 0);
        for _ in 0..60 {
            reference.update();
            high_rate.update();
        }
        assert_eq!(
            reference.channel(0).unwrap().note_index,
            high_rate.channel(0).unwrap().note_index
        );
    }

    #[test]
    fn concurrent_noise_voices_share_one_lfsr_step() {
        // Sfx 1 note 0 is a full-volume noise note; start it on two
        // voices and both must read the same LFSR output per sample.
        let mut s = synth();
        s.play(1, 0);
        s.play(1, 1);
        let mut reference = Synth::new(SAMPLE_RATE);
        reference.play(1, 0);
        for _ in 0..32 {
            // Two correlated voices average to the single-voice signal
            assert_eq!(s.next_sample(), reference.next_sample());
        }
    }

    #[test]
    fn output_is_always_in_range_across_the_library() {
        // u8 can't leave [0,255]; assert the mix stays centered enough to
        // not saturate constantly instead.
        let mut s = synth();
        for id in 0..8 {
            s.play(id, id % NUM_CHANNELS);
        }
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for i in 0..(SAMPLE_RATE as usize) {
            let v = s.next_sample();
            min = min.min(v);
            max = max.max(v);
            if i % 367 == 0 {
                s.update();
            }
        }
        assert!(min < SILENCE && max > SILENCE, "min {} max {}", min, max);
    }
}
