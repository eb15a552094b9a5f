//! Playback engine for the chiptone synthesizer.
//!
//! Renders the built-in sound-effect library through a bank of
//! phase-accumulator oscillators. Two entry points drive a [`Synth`]:
//! [`Synth::next_sample`] at sample rate and [`Synth::update`] at frame
//! rate. The render path is allocation-free and never blocks.

#![cfg_attr(not(feature = "std"), no_std)]

mod channel;
mod frequency;
pub mod oscillator;
mod synth;

pub use channel::{Channel, REFERENCE_SAMPLE_RATE, UNITS_PER_SPEED_STEP};
pub use frequency::pitch_to_increment;
pub use oscillator::Noise;
pub use synth::{Synth, FRAME_RATE, NUM_CHANNELS, SAMPLE_RATE, SILENCE};
