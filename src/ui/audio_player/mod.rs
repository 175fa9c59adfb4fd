// Audio preview playback
mod audio_backend;
mod preview_state;

pub use preview_state::PreviewState;
