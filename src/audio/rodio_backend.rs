//! Synthesized background music played through rodio.

use super::{AudioSink, Track};
use crate::core::constants::MUSIC_VOLUME;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use std::f32::consts::TAU;
use tracing::warn;

const SAMPLE_RATE: u32 = 44_100;
const BEAT_SECONDS: f32 = 0.22;

/// (frequency in Hz, length in beats); 0 Hz is a rest.
const BACKGROUND_TUNE: [(f32, f32); 16] = [
    (220.0, 1.0),
    (261.6, 1.0),
    (329.6, 1.0),
    (261.6, 1.0),
    (293.7, 1.0),
    (349.2, 1.0),
    (440.0, 2.0),
    (0.0, 1.0),
    (392.0, 1.0),
    (329.6, 1.0),
    (261.6, 1.0),
    (293.7, 1.0),
    (246.9, 1.0),
    (196.0, 1.0),
    (220.0, 2.0),
    (0.0, 2.0),
];

/// Render a sequence of notes to mono samples with a short attack and decay.
fn render_tune(notes: &[(f32, f32)], sample_rate: u32) -> Vec<f32> {
    let mut samples = Vec::new();
    for &(freq, beats) in notes {
        let count = (beats * BEAT_SECONDS * sample_rate as f32) as usize;
        let attack = (sample_rate as f32 * 0.01) as usize;
        for i in 0..count {
            if freq <= 0.0 {
                samples.push(0.0);
                continue;
            }
            let t = i as f32 / sample_rate as f32;
            let envelope = if i < attack {
                i as f32 / attack.max(1) as f32
            } else {
                1.0 - (i - attack) as f32 / (count - attack).max(1) as f32
            };
            samples.push((TAU * freq * t).sin() * envelope * 0.3);
        }
    }
    samples
}

/// Looping music on the default output device.
pub struct RodioAudio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl RodioAudio {
    pub fn new() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }
}

impl AudioSink for RodioAudio {
    fn play_looping(&mut self, track: Track) {
        self.stop();
        let notes: &[(f32, f32)] = match track {
            Track::Background => &BACKGROUND_TUNE,
        };
        match Sink::try_new(&self.handle) {
            Ok(sink) => {
                sink.set_volume(MUSIC_VOLUME);
                let source = SamplesBuffer::new(1, SAMPLE_RATE, render_tune(notes, SAMPLE_RATE));
                sink.append(source.repeat_infinite());
                self.sink = Some(sink);
            }
            Err(e) => warn!(error = %e, "could not open audio sink"),
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tune_length_and_range() {
        let samples = render_tune(&[(440.0, 1.0), (0.0, 1.0)], 1000);
        let per_beat = (BEAT_SECONDS * 1000.0) as usize;
        assert_eq!(samples.len(), per_beat * 2);
        assert!(samples.iter().all(|s| s.abs() <= 0.3));
        assert!(samples[per_beat..].iter().all(|s| *s == 0.0));
    }
}
