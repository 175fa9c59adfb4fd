use std::path::Path;
use std::time::Instant;

use kira::{
    AudioManager, AudioManagerSettings, DefaultBackend, Tween,
    sound::FromFileError,
    sound::streaming::{StreamingSoundData, StreamingSoundHandle},
};

use super::trait_def::AudioBackend;
use crate::error::UiError;

/// Read the duration of a WAV file from its header
pub fn wav_duration_secs(path: &Path) -> Result<f32, UiError> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return Ok(0.0);
    }
    // `duration` counts frames, independent of channel count
    Ok(reader.duration() as f32 / spec.sample_rate as f32)
}

/// Native audio backend implementation using kira
pub struct NativeAudioBackend {
    manager: Option<AudioManager<DefaultBackend>>,
    sound_handle: Option<StreamingSoundHandle<FromFileError>>,
    /// Position when paused or stopped
    current_position: f32,
    playback_start_time: Option<Instant>,
    playback_start_position: f32,
    duration: f32,
    audio_loaded: bool,
    is_playing: bool,
    initialized: bool,
    volume: f32,
}

impl NativeAudioBackend {
    pub fn new() -> Self {
        Self {
            manager: None,
            sound_handle: None,
            current_position: 0.0,
            playback_start_time: None,
            playback_start_position: 0.0,
            duration: 0.0,
            audio_loaded: false,
            is_playing: false,
            initialized: false,
            volume: 1.0,
        }
    }

    fn volume_to_decibels(volume: f32) -> f32 {
        let clamped = volume.clamp(0.0, 1.0);
        if clamped <= 0.0 {
            -80.0
        } else {
            20.0 * clamped.log10()
        }
    }

    fn clamp_to_duration(&self, position: f32) -> f32 {
        if self.duration > 0.0 {
            position.clamp(0.0, self.duration)
        } else {
            position.max(0.0)
        }
    }
}

impl AudioBackend for NativeAudioBackend {
    fn init(&mut self) -> Result<(), UiError> {
        match AudioManager::<DefaultBackend>::new(AudioManagerSettings::default()) {
            Ok(manager) => {
                self.manager = Some(manager);
                self.initialized = true;
                Ok(())
            }
            Err(e) => {
                self.initialized = false;
                Err(UiError::AudioBackend {
                    reason: format!("Failed to initialize audio manager: {e}"),
                })
            }
        }
    }

    fn play_file(&mut self, path: &Path) -> Result<(), UiError> {
        let manager = self.manager.as_mut().ok_or_else(|| UiError::AudioBackend {
            reason: "Audio backend not initialized".to_owned(),
        })?;

        if let Some(mut handle) = self.sound_handle.take() {
            handle.stop(Tween::default());
        }

        let sound_data = StreamingSoundData::from_file(path).map_err(|e| UiError::AudioBackend {
            reason: format!("Failed to load audio file: {e}"),
        })?;

        let mut handle = manager.play(sound_data).map_err(|e| UiError::AudioBackend {
            reason: format!("Failed to start audio playback: {e}"),
        })?;

        self.duration = match wav_duration_secs(path) {
            Ok(secs) => secs,
            Err(e) => {
                log::debug!("No WAV duration for {}: {e}", path.display());
                0.0
            }
        };
        self.current_position = 0.0;
        self.playback_start_time = Some(Instant::now());
        self.playback_start_position = 0.0;
        self.audio_loaded = true;
        self.is_playing = true;

        handle.set_volume(Self::volume_to_decibels(self.volume), Tween::default());

        self.sound_handle = Some(handle);
        Ok(())
    }

    fn pause(&mut self) -> Result<(), UiError> {
        let handle = self.sound_handle.as_mut().ok_or(UiError::NoAudioLoaded)?;
        if self.is_playing {
            if let Some(start_time) = self.playback_start_time {
                let elapsed = start_time.elapsed().as_secs_f32();
                self.current_position = self.playback_start_position + elapsed;
            }
        }
        handle.pause(Tween::default());
        self.is_playing = false;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), UiError> {
        let handle = self.sound_handle.as_mut().ok_or(UiError::NoAudioLoaded)?;
        handle.set_volume(Self::volume_to_decibels(self.volume), Tween::default());
        handle.resume(Tween::default());

        self.playback_start_time = Some(Instant::now());
        self.playback_start_position = self.current_position;
        self.is_playing = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), UiError> {
        let mut handle = self.sound_handle.take().ok_or(UiError::NoAudioLoaded)?;
        self.current_position = 0.0;
        self.playback_start_position = 0.0;
        self.playback_start_time = None;
        self.is_playing = false;
        self.audio_loaded = false;

        handle.stop(Tween::default());
        Ok(())
    }

    fn set_position(&mut self, position_secs: f32) -> Result<(), UiError> {
        if !self.audio_loaded {
            return Err(UiError::NoAudioLoaded);
        }

        let clamped_position = self.clamp_to_duration(position_secs);
        self.current_position = clamped_position;
        self.playback_start_position = clamped_position;

        let handle = self.sound_handle.as_mut().ok_or(UiError::NoAudioLoaded)?;
        handle.seek_to(f64::from(clamped_position));
        if self.is_playing {
            self.playback_start_time = Some(Instant::now());
        }
        Ok(())
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), UiError> {
        self.volume = volume;
        if let Some(handle) = &mut self.sound_handle {
            handle.set_volume(Self::volume_to_decibels(self.volume), Tween::default());
        }
        Ok(())
    }

    fn is_playing(&self) -> bool {
        if !self.audio_loaded {
            return false;
        }
        if self.is_playing && self.duration > 0.0 {
            return self.position() < self.duration;
        }
        self.is_playing
    }

    fn position(&self) -> f32 {
        if !self.is_playing {
            return self.current_position;
        }
        match self.playback_start_time {
            Some(start_time) => {
                let position = self.playback_start_position + start_time.elapsed().as_secs_f32();
                self.clamp_to_duration(position)
            }
            None => self.current_position,
        }
    }

    fn duration(&self) -> f32 {
        self.duration
    }

    fn is_available(&self) -> bool {
        self.initialized
    }
}

impl Default for NativeAudioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NativeAudioBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeAudioBackend")
            .field("duration", &self.duration)
            .field("audio_loaded", &self.audio_loaded)
            .field("initialized", &self.initialized)
            .field("volume", &self.volume)
            .field("manager", &self.manager.as_ref().map(|_| "<audio manager>"))
            .field("sound_handle", &self.sound_handle.as_ref().map(|_| "<sound handle>"))
            .finish()
    }
}
