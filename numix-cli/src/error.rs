use std::fmt::{Display, Formatter};

use numix_lib::MixerError;

/// Error type for a demo run.
#[derive(Debug)]
pub enum RunError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Mixer(MixerError),
}

impl Display for RunError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Json(err) => write!(f, "json error: {}", err),
            Self::Mixer(err) => write!(f, "mixer error: {}", err),
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<MixerError> for RunError {
    fn from(value: MixerError) -> Self {
        Self::Mixer(value)
    }
}
