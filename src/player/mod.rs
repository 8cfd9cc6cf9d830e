//! Active-card / audio-rotation coordination.
//!
//! Exactly one clip sounds at a time across a gallery, and selecting any
//! card advances a shared round-robin cursor over the clip list. The state
//! lives in a [`Coordinator`] instance rather than module globals, so
//! independent galleries can coexist. The audio device sits behind the
//! [`AudioBackend`] seam; tests inject a fake, the `playback` feature ships
//! a rodio-backed implementation.

#[cfg(feature = "playback")]
pub mod rodio_backend;

use std::fmt;

use crate::models::audio::AudioClip;

#[derive(Debug)]
pub enum PlaybackError {
    /// The backend could not start the clip (decode failure, dead device,
    /// missing bytes). The rotation cursor has already advanced.
    Backend(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Backend(msg) => write!(f, "playback failed: {msg}"),
        }
    }
}

/// A single in-flight playback. Dropping or stopping it must silence the
/// clip; `is_finished` reports natural end-of-clip.
pub trait PlaybackHandle {
    /// Pause and rewind. Idempotent.
    fn stop(&mut self);
    fn is_finished(&self) -> bool;
}

pub trait AudioBackend {
    type Handle: PlaybackHandle;
    fn start(&mut self, clip: &AudioClip) -> Result<Self::Handle, PlaybackError>;
}

/// Owns the rotation cursor, the single current playback handle, and the
/// single active card id.
pub struct Coordinator<B: AudioBackend> {
    backend: B,
    clips: Vec<AudioClip>,
    cursor: usize,
    active_card: Option<String>,
    current: Option<B::Handle>,
}

impl<B: AudioBackend> Coordinator<B> {
    pub fn new(backend: B) -> Self {
        Self::with_clips(backend, Vec::new())
    }

    pub fn with_clips(backend: B, clips: Vec<AudioClip>) -> Self {
        Self {
            backend,
            clips,
            cursor: 0,
            active_card: None,
            current: None,
        }
    }

    /// Replace the clip list (e.g. after a refresh). The cursor keeps its
    /// monotonic count; it wraps modulo the new length at the next use.
    pub fn set_clips(&mut self, clips: Vec<AudioClip>) {
        self.clips = clips;
    }

    pub fn clips(&self) -> &[AudioClip] {
        &self.clips
    }

    /// The card currently marked active (visually animating), if any.
    pub fn active_card(&self) -> Option<&str> {
        self.active_card.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// A card was triggered. Advances the rotation, stops whatever is
    /// sounding, and starts the next clip. Re-triggering the already-active
    /// card restarts the rotation like any other trigger.
    ///
    /// The stop happens synchronously before the new start, inside this
    /// single `&mut self` call, so two clips can never sound at once.
    pub fn select_card(&mut self, card_id: &str) -> Result<(), PlaybackError> {
        if self.clips.is_empty() {
            return Ok(());
        }

        let index = self.cursor % self.clips.len();
        // Advance even if the start below fails, so repeated triggers keep
        // rotating through the list.
        self.cursor = self.cursor.wrapping_add(1);

        if let Some(mut handle) = self.current.take() {
            handle.stop();
        }

        match self.backend.start(&self.clips[index]) {
            Ok(handle) => {
                self.current = Some(handle);
                // A single Option holds the active card, so marking this one
                // active implicitly clears whichever card was active before.
                self.active_card = Some(card_id.to_string());
                Ok(())
            }
            Err(e) => {
                self.active_card = None;
                Err(e)
            }
        }
    }

    /// Observe natural end-of-clip: once the current handle reports
    /// finished, the active/animating state clears.
    pub fn poll(&mut self) {
        let finished = self
            .current
            .as_ref()
            .map(|h| h.is_finished())
            .unwrap_or(false);
        if finished {
            self.current = None;
            self.active_card = None;
        }
    }

    /// Stop playback and clear the active card (e.g. on gallery shutdown).
    pub fn stop(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.stop();
        }
        self.active_card = None;
    }
}
