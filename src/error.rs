use thiserror::Error;

#[derive(Debug, Error)]
pub enum RingSizerError {
    #[error("Unknown ring size: {0}")]
    UnknownSize(String),

    #[error("Calibration error: {0}")]
    Calibration(String),

    #[error("History error: {0}")]
    History(String),
}

impl From<RingSizerError> for String {
    fn from(err: RingSizerError) -> Self {
        err.to_string()
    }
}
