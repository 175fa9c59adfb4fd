use std::path::{Path, PathBuf};

use super::audio_backend::{AudioBackend, PlatformAudioBackend};
use crate::error::UiError;

/// Playback state of the preview player.
///
/// The backend is opened on the first play request, so a preview that
/// is never played never touches the audio device.
pub struct PreviewState {
    pub source: Option<PathBuf>,
    pub is_playing: bool,
    pub current_position: f32,
    pub total_duration: f32,
    /// 0.0 - 1.0
    pub volume: f32,
    pub is_muted: bool,
    previous_volume: f32,
    /// Set once the backend failed to open, so we don't retry every frame
    backend_failed: bool,
    /// Whether the backend holds the current source (paused or playing)
    loaded: bool,
    backend: Option<Box<dyn AudioBackend>>,
}

impl std::fmt::Debug for PreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewState")
            .field("source", &self.source)
            .field("is_playing", &self.is_playing)
            .field("current_position", &self.current_position)
            .field("total_duration", &self.total_duration)
            .field("volume", &self.volume)
            .field("is_muted", &self.is_muted)
            .field("backend", &self.backend.as_ref().map(|_| "<audio backend>"))
            .finish()
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            source: None,
            is_playing: false,
            current_position: 0.0,
            total_duration: 0.0,
            volume: 0.8,
            is_muted: false,
            previous_volume: 0.8,
            backend_failed: false,
            loaded: false,
            backend: None,
        }
    }
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap the previewed file. Stops whatever is playing.
    pub fn set_source(&mut self, source: Option<PathBuf>) {
        self.stop();
        self.total_duration = match source.as_deref() {
            Some(path) => Self::probe_duration(path),
            None => 0.0,
        };
        self.source = source;
    }

    fn probe_duration(path: &Path) -> f32 {
        match super::audio_backend::wav_duration_secs(path) {
            Ok(secs) => secs,
            Err(e) => {
                log::debug!("Could not read duration of {}: {e}", path.display());
                0.0
            }
        }
    }

    fn backend(&mut self) -> Result<&mut Box<dyn AudioBackend>, UiError> {
        if self.backend.is_none() {
            if self.backend_failed {
                return Err(UiError::AudioBackend {
                    reason: "Audio output unavailable".to_owned(),
                });
            }
            let mut backend: Box<dyn AudioBackend> = Box::new(PlatformAudioBackend::new());
            if let Err(e) = backend.init() {
                self.backend_failed = true;
                return Err(e);
            }
            log::info!("Audio backend initialized");
            self.backend = Some(backend);
        }
        self.backend.as_mut().ok_or(UiError::NoAudioLoaded)
    }

    /// Play or pause the current source
    pub fn toggle_play(&mut self) -> Result<(), UiError> {
        if self.is_playing {
            self.is_playing = false;
            if let Some(backend) = &mut self.backend {
                backend.pause()?;
            }
            return Ok(());
        }

        let source = self.source.clone().ok_or(UiError::NoAudioLoaded)?;
        let position = self.current_position;
        let volume = self.effective_volume();
        let loaded = self.loaded;
        let backend = self.backend()?;

        if loaded {
            backend.resume()?;
        } else {
            backend.play_file(&source)?;
            backend.set_volume(volume)?;
            if position > 0.0 {
                if let Err(e) = backend.set_position(position) {
                    log::error!("Failed to seek to position {position}: {e}");
                }
            }
        }
        let duration = backend.duration();

        if duration > 0.0 {
            self.total_duration = duration;
        }
        self.loaded = true;
        self.is_playing = true;
        Ok(())
    }

    pub fn stop(&mut self) {
        self.is_playing = false;
        self.current_position = 0.0;
        self.loaded = false;
        if let Some(backend) = &mut self.backend {
            match backend.stop() {
                Ok(()) | Err(UiError::NoAudioLoaded) => {}
                Err(e) => log::error!("Failed to stop audio: {e}"),
            }
        }
    }

    /// Move the play head. Applied to the backend right away when loaded,
    /// otherwise on the next play.
    pub fn set_position(&mut self, position: f32) {
        self.current_position = if self.total_duration > 0.0 {
            position.clamp(0.0, self.total_duration)
        } else {
            position.max(0.0)
        };
        if self.loaded {
            if let Some(backend) = &mut self.backend {
                if let Err(e) = backend.set_position(self.current_position) {
                    log::error!("Failed to set audio position: {e}");
                }
            }
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if self.volume > 0.0 {
            self.is_muted = false;
        }
        self.apply_volume();
    }

    pub fn toggle_mute(&mut self) {
        if self.is_muted {
            self.volume = self.previous_volume;
            self.is_muted = false;
        } else {
            self.previous_volume = self.volume;
            self.volume = 0.0;
            self.is_muted = true;
        }
        self.apply_volume();
    }

    fn effective_volume(&self) -> f32 {
        if self.is_muted { 0.0 } else { self.volume }
    }

    fn apply_volume(&mut self) {
        let volume = self.effective_volume();
        if let Some(backend) = &mut self.backend {
            if let Err(e) = backend.set_volume(volume) {
                log::error!("Failed to set audio volume: {e}");
            }
        }
    }

    /// Pull the play head from the backend; stops at the end of the track
    pub fn update_from_backend(&mut self) {
        if !self.is_playing {
            return;
        }
        let Some(backend) = &self.backend else {
            return;
        };
        self.current_position = backend.position();
        if !backend.is_playing() {
            self.stop();
        }
    }

    pub fn format_position(&self) -> String {
        format_time(self.current_position)
    }

    pub fn format_duration(&self) -> String {
        format_time(self.total_duration)
    }

    /// Playback progress as a ratio (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        if self.total_duration > 0.0 {
            (self.current_position / self.total_duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// MM:SS
fn format_time(secs: f32) -> String {
    let secs = secs.max(0.0);
    let minutes = (secs / 60.0).floor() as u32;
    let seconds = (secs % 60.0).floor() as u32;
    format!("{minutes:02}:{seconds:02}")
}
