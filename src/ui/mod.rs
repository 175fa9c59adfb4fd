// UI component modules
mod audio_player;
pub mod components;
pub mod history;
pub mod layout;
