//! Background music boundary.
//!
//! The game only ever starts a looping track and stops it; nothing waits on
//! playback. [`SilentAudio`] is the default sink, the rodio-backed
//! [`RodioAudio`] needs the `audio` feature.

#[cfg(feature = "audio")]
mod rodio_backend;

#[cfg(feature = "audio")]
pub use rodio_backend::RodioAudio;

use tracing::debug;

/// Music the game can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
}

/// Fire-and-forget music playback.
pub trait AudioSink {
    /// Start `track`, looping forever, replacing whatever was playing.
    fn play_looping(&mut self, track: Track);

    fn stop(&mut self);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_looping(&mut self, track: Track) {
        debug!(?track, "music start (silent)");
    }

    fn stop(&mut self) {
        debug!("music stop (silent)");
    }
}

/// One call made on an [`AudioLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play(Track),
    Stop,
}

/// Records calls instead of playing; used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct AudioLog {
    pub calls: Vec<AudioCall>,
}

impl AudioSink for AudioLog {
    fn play_looping(&mut self, track: Track) {
        self.calls.push(AudioCall::Play(track));
    }

    fn stop(&mut self) {
        self.calls.push(AudioCall::Stop);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn play_looping(&mut self, track: Track) {
        (**self).play_looping(track);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}
