use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown source '{0}' (expected 'metacritic' or 'steam')")]
    UnknownSource(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
