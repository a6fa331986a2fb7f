use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("hex color must be 6 characters (e.g. #FF0000 or FF0000), got '{0}'")]
    InvalidFormat(String),

    #[error("'{0}' is not a valid percentage")]
    InvalidPercent(String),

    #[error("step cannot be 0")]
    InvalidStep,

    #[error("range would produce more than {limit} adjustments")]
    TooManySteps { limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
