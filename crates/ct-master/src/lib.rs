//! Headless controller for the chiptone synthesizer.
//!
//! Provides a unified API for real-time playback and offline rendering
//! that a GUI, a game loop, or the CLI can share.
//!
//! Real-time playback follows the shared-state contract of the engine: a
//! dedicated audio thread owns the [`Synth`] outright and is the only
//! code that touches it. Control calls travel over a lock-free SPSC
//! queue, so neither side ever blocks on the other and the render path
//! stays allocation-free.

mod wav;

use ct_audio::{AudioOutput, CpalOutput};
use ct_engine::{Synth, FRAME_RATE};
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::{HeapCons, HeapProd, HeapRb};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

// Re-export common types so callers don't need ct-sfx/ct-engine directly.
pub use ct_engine::{NUM_CHANNELS, SAMPLE_RATE, SILENCE, UNITS_PER_SPEED_STEP};
pub use ct_sfx::{library, Sfx, SFX_LENGTH};

pub use wav::{samples_to_wav, write_wav};

/// Capacity of the control-command queue.
const COMMAND_QUEUE_LEN: usize = 64;

/// A control-surface call forwarded to the audio thread.
#[derive(Clone, Copy, Debug)]
enum Command {
    Play { sfx_id: u8, channel: u8 },
    Stop { channel: u8 },
    StopAll,
    SetMasterVolume(u8),
}

/// Real-time playback controller.
///
/// Spawns an audio thread on construction; dropping the player stops the
/// stream and joins the thread.
pub struct Player {
    commands: HeapProd<Command>,
    stop_signal: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl Player {
    /// Start the audio thread and return a handle to its control surface.
    pub fn new() -> Self {
        let rb = HeapRb::<Command>::new(COMMAND_QUEUE_LEN);
        let (producer, consumer) = rb.split();
        let stop_signal = Arc::new(AtomicBool::new(false));
        let finished = Arc::new(AtomicBool::new(false));

        let stop = stop_signal.clone();
        let done = finished.clone();
        let thread = std::thread::spawn(move || {
            audio_thread(consumer, stop, done);
        });

        Self {
            commands: producer,
            stop_signal,
            finished,
            thread: Some(thread),
        }
    }

    /// Start a library sound effect on a voice. Invalid ids are absorbed
    /// by the engine as no-ops, matching the control-surface contract.
    pub fn play(&mut self, sfx_id: u8, channel: u8) {
        self.send(Command::Play { sfx_id, channel });
    }

    /// Stop one voice.
    pub fn stop(&mut self, channel: u8) {
        self.send(Command::Stop { channel });
    }

    /// Stop every voice.
    pub fn stop_all(&mut self) {
        self.send(Command::StopAll);
    }

    /// Set the master output scalar (0-255).
    pub fn set_master_volume(&mut self, level: u8) {
        self.send(Command::SetMasterVolume(level));
    }

    /// Is the audio thread still up? False once the device failed or the
    /// player shut down.
    pub fn is_running(&self) -> bool {
        !self.finished.load(Ordering::Relaxed)
    }

    /// Stop the stream and join the audio thread.
    pub fn shutdown(&mut self) {
        self.stop_signal.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn send(&mut self, command: Command) {
        // A full queue means the audio thread is gone or badly starved;
        // dropping the command matches the fail-silent control contract.
        let _ = self.commands.try_push(command);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn audio_thread(
    mut commands: HeapCons<Command>,
    stop_signal: Arc<AtomicBool>,
    finished: Arc<AtomicBool>,
) {
    let Ok((mut output, consumer)) = CpalOutput::new() else {
        finished.store(true, Ordering::Relaxed);
        return;
    };

    let sample_rate = output.sample_rate();
    let mut synth = Synth::new(sample_rate);

    if output.build_stream(consumer).is_err() {
        finished.store(true, Ordering::Relaxed);
        return;
    }
    let _ = output.start();

    // The output ring buffer paces this loop to real time; the sequencer
    // ticks once per frame's worth of samples.
    let samples_per_frame = (sample_rate / FRAME_RATE).max(1) as u64;
    let mut sample_count: u64 = 0;

    while !stop_signal.load(Ordering::Relaxed) {
        while let Some(command) = commands.try_pop() {
            apply(&mut synth, command);
        }

        output.write_spin(synth.next_sample());
        sample_count += 1;
        if sample_count % samples_per_frame == 0 {
            synth.update();
        }
    }

    let _ = output.stop();
    finished.store(true, Ordering::Relaxed);
}

fn apply(synth: &mut Synth, command: Command) {
    match command {
        Command::Play { sfx_id, channel } => synth.play(sfx_id as usize, channel as usize),
        Command::Stop { channel } => synth.stop(channel as usize),
        Command::StopAll => synth.stop_all(),
        Command::SetMasterVolume(level) => synth.set_master_volume(level),
    }
}

// --- Offline rendering ---

/// Render a library sound effect to raw unsigned 8-bit samples.
///
/// Runs the sequencer at the nominal frame rate and stops when the voice
/// goes inactive or `max_samples` is reached (looping effects only stop
/// at the cap). An unplayable id yields an empty buffer.
pub fn render_samples(sfx_id: usize, sample_rate: u32, max_samples: usize) -> Vec<u8> {
    let mut synth = Synth::new(sample_rate);
    synth.play(sfx_id, 0);

    let samples_per_frame = (sample_rate / FRAME_RATE).max(1) as usize;
    let mut samples = Vec::with_capacity(max_samples.min(sample_rate as usize * 4));

    while synth.any_active() && samples.len() < max_samples {
        let block = samples_per_frame.min(max_samples - samples.len());
        for _ in 0..block {
            samples.push(synth.next_sample());
        }
        synth.update();
    }
    samples
}

/// Render a library sound effect straight to an in-memory WAV file.
pub fn render_to_wav(sfx_id: usize, sample_rate: u32, max_seconds: u32) -> Vec<u8> {
    let max_samples = (sample_rate * max_seconds) as usize;
    let samples = render_samples(sfx_id, sample_rate, max_samples);
    wav::samples_to_wav(&samples, sample_rate)
}
