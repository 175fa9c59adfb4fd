use std::path::Path;

use crate::error::UiError;

/// Audio playback backend trait
/// Defines the interface for platform-specific audio playback implementations
pub trait AudioBackend: std::fmt::Debug {
    /// Open the output device
    fn init(&mut self) -> Result<(), UiError>;

    /// Start playing a file from the beginning
    fn play_file(&mut self, path: &Path) -> Result<(), UiError>;

    fn pause(&mut self) -> Result<(), UiError>;

    fn resume(&mut self) -> Result<(), UiError>;

    fn stop(&mut self) -> Result<(), UiError>;

    /// Set the playback position in seconds
    fn set_position(&mut self, position_secs: f32) -> Result<(), UiError>;

    /// Set the volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32) -> Result<(), UiError>;

    fn is_playing(&self) -> bool;

    /// Current playback position in seconds
    fn position(&self) -> f32;

    /// Duration of the loaded audio in seconds, 0 when unknown
    fn duration(&self) -> f32;

    /// Whether `init` succeeded
    fn is_available(&self) -> bool;
}
