use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
}
