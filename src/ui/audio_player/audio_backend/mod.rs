mod trait_def;
pub use trait_def::AudioBackend;

mod native;
pub use native::{NativeAudioBackend as PlatformAudioBackend, wav_duration_secs};
