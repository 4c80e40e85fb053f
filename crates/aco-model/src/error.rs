use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown filter dimension '{0}' (expected party, rapporteur, year or winner)")]
    UnknownDimension(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
