//! CPAL-based audio output backend.
//!
//! Pushes the synthesizer's unsigned 8-bit mono samples through a ring
//! buffer into the device callback, which recenters them to f32 and fans
//! the mono signal out to every device channel.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::{HeapCons, HeapProd, HeapRb};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::traits::{AudioError, AudioOutput};

/// Unsigned 8-bit sample to f32 in [-1, 1).
#[inline]
fn sample_to_f32(sample: u8) -> f32 {
    (sample as f32 - 128.0) / 128.0
}

/// CPAL-based audio output.
pub struct CpalOutput {
    device: Device,
    config: StreamConfig,
    stream: Option<Stream>,
    producer: HeapProd<u8>,
    running: Arc<AtomicBool>,
}

impl CpalOutput {
    /// Create a new CPAL output with the default device.
    pub fn new() -> Result<(Self, HeapCons<u8>), AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;

        let config = device
            .default_output_config()
            .map_err(|e| AudioError::DeviceInit(e.to_string()))?;

        let config: StreamConfig = config.into();

        // Ring buffer for about 100ms of mono samples
        let buffer_size = config.sample_rate.0 as usize / 10;
        let rb = HeapRb::<u8>::new(buffer_size);
        let (producer, consumer) = rb.split();

        let output = Self {
            device,
            config,
            stream: None,
            producer,
            running: Arc::new(AtomicBool::new(false)),
        };

        Ok((output, consumer))
    }

    /// Build and start the audio stream.
    pub fn build_stream(&mut self, mut consumer: HeapCons<u8>) -> Result<(), AudioError> {
        let running = self.running.clone();
        let channels = self.config.channels as usize;

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if !running.load(Ordering::Relaxed) {
                        for sample in data.iter_mut() {
                            *sample = 0.0;
                        }
                        return;
                    }

                    // One synth sample per device frame, copied to all channels
                    for chunk in data.chunks_mut(channels) {
                        let value = match consumer.try_pop() {
                            Some(sample) => sample_to_f32(sample),
                            None => 0.0,
                        };
                        for sample in chunk.iter_mut() {
                            *sample = value;
                        }
                    }
                },
                |err| eprintln!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::StreamCreate(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::Playback(e.to_string()))?;
        self.stream = Some(stream);

        Ok(())
    }

    /// Write a single sample, spinning until the ring buffer has room.
    pub fn write_spin(&mut self, sample: u8) {
        while self.producer.try_push(sample).is_err() {
            std::hint::spin_loop();
        }
    }
}

impl AudioOutput for CpalOutput {
    fn sample_rate(&self) -> u32 {
        self.config.sample_rate.0
    }

    fn write(&mut self, samples: &[u8]) -> Result<(), AudioError> {
        for &sample in samples {
            // Non-blocking push; drop samples if the buffer is full
            let _ = self.producer.try_push(sample);
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), AudioError> {
        self.running.store(true, Ordering::Relaxed);
        if let Some(ref stream) = self.stream {
            stream
                .play()
                .map_err(|e| AudioError::Playback(e.to_string()))?;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AudioError> {
        self.running.store(false, Ordering::Relaxed);
        if let Some(ref stream) = self.stream {
            stream
                .pause()
                .map_err(|e| AudioError::Playback(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centerline_maps_to_zero() {
        assert_eq!(sample_to_f32(128), 0.0);
    }

    #[test]
    fn extremes_stay_within_unit_range() {
        assert_eq!(sample_to_f32(0), -1.0);
        assert!(sample_to_f32(255) < 1.0);
        assert!(sample_to_f32(255) > 0.99);
    }
}
