//! Sound-effect data model for the chiptone synthesizer.
//!
//! Defines the note/sequence types consumed by the playback engine plus
//! the built-in sound-effect library. Everything here is compile-time
//! constant data; there is no dynamic loading and no allocation.
//!
//! Designed to be `no_std` compatible.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod library;
mod note;
mod pitch;
mod sfx;

pub use note::Note;
pub use pitch::{pitch_to_freq, FREQ_TABLE, PITCH_COUNT};
pub use sfx::{Sfx, SFX_LENGTH};
