//! rodio-backed [`AudioBackend`] for the terminal gallery.
//!
//! Clip bytes are pre-fetched by the caller and decoded from memory, so
//! starting a clip never does network I/O.

use std::collections::HashMap;
use std::io::Cursor;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::models::audio::AudioClip;
use crate::player::{AudioBackend, PlaybackError, PlaybackHandle};

pub struct RodioBackend {
    // The stream must outlive every sink created from its handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clip_bytes: HashMap<String, Vec<u8>>,
}

impl RodioBackend {
    pub fn new(clip_bytes: HashMap<String, Vec<u8>>) -> Result<Self, PlaybackError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PlaybackError::Backend(format!("no audio output device: {e}")))?;
        Ok(Self {
            _stream: stream,
            handle,
            clip_bytes,
        })
    }
}

pub struct RodioHandle {
    sink: Sink,
}

impl PlaybackHandle for RodioHandle {
    fn stop(&mut self) {
        self.sink.stop();
    }

    fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}

impl AudioBackend for RodioBackend {
    type Handle = RodioHandle;

    fn start(&mut self, clip: &AudioClip) -> Result<RodioHandle, PlaybackError> {
        let bytes = self
            .clip_bytes
            .get(&clip.id)
            .ok_or_else(|| PlaybackError::Backend(format!("no bytes cached for {}", clip.id)))?
            .clone();

        let source = Decoder::new(Cursor::new(bytes))
            .map_err(|e| PlaybackError::Backend(format!("cannot decode {}: {e}", clip.name)))?;

        let sink = Sink::try_new(&self.handle)
            .map_err(|e| PlaybackError::Backend(format!("cannot open sink: {e}")))?;
        sink.append(source);
        sink.play();

        Ok(RodioHandle { sink })
    }
}
