//! Allocation-free render path tests.
//!
//! The sample clock runs in a context that must never allocate. These
//! tests render every library entry with the sequencer ticking, aborting
//! on any heap allocation inside the render loop.
//!
//! Just run `cargo test` — no feature flags needed.

use assert_no_alloc::{assert_no_alloc, AllocDisabler};

#[cfg(debug_assertions)]
#[global_allocator]
static A: AllocDisabler = AllocDisabler;

use ct_engine::{Synth, FRAME_RATE, NUM_CHANNELS, SAMPLE_RATE};

/// Render `frames` host frames, aborting on any heap allocation.
fn assert_render_alloc_free(synth: &mut Synth, frames: u32) {
    let mut buf = vec![0u8; (SAMPLE_RATE / FRAME_RATE) as usize];
    assert_no_alloc(|| {
        for _ in 0..frames {
            synth.render(&mut buf);
            synth.update();
        }
    });
}

#[test]
fn single_voice_render_is_alloc_free() {
    let mut synth = Synth::new(SAMPLE_RATE);
    synth.play(0, 0);
    assert_render_alloc_free(&mut synth, 2 * FRAME_RATE);
}

#[test]
fn full_bank_render_is_alloc_free() {
    let mut synth = Synth::new(SAMPLE_RATE);
    for ch in 0..NUM_CHANNELS {
        synth.play(ch, ch);
    }
    assert_render_alloc_free(&mut synth, 2 * FRAME_RATE);
}

#[test]
fn control_calls_are_alloc_free() {
    let mut synth = Synth::new(SAMPLE_RATE);
    assert_no_alloc(|| {
        synth.play(0, 0);
        synth.play(2, 1);
        synth.set_master_volume(180);
        synth.stop(1);
        synth.stop_all();
    });
}
