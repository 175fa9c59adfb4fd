use std::fmt;

/// Errors raised by the widget layer and the audio preview
#[derive(Debug)]
pub enum UiError {
    /// Audio output could not be opened or driven
    AudioBackend { reason: String },
    /// No audio is loaded in the preview player
    NoAudioLoaded,
    /// A table row has the wrong number of cells
    RowShape { expected: usize, found: usize },
    /// A table cell does not match its column datatype
    CellType { column: usize, expected: &'static str },
    /// IO error
    Io(std::io::Error),
    /// WAV header could not be read
    Wav(hound::Error),
    /// Label catalog is not valid JSON
    Json(serde_json::Error),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AudioBackend { reason } => write!(f, "Audio backend error: {reason}"),
            Self::NoAudioLoaded => write!(f, "No audio loaded"),
            Self::RowShape { expected, found } => {
                write!(f, "Row has {found} cells, expected {expected}")
            }
            Self::CellType { column, expected } => {
                write!(f, "Cell in column {column} is not of type {expected}")
            }
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Wav(err) => write!(f, "WAV error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Wav(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<hound::Error> for UiError {
    fn from(err: hound::Error) -> Self {
        Self::Wav(err)
    }
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
