use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("analysis result is not a JSON object (got {0})")]
    MalformedInput(String),
}
