use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(
        "invalid number of arguments ({0}), use either 2 arguments (hex, percent) \
         or 4 arguments (hex, start, end, step)"
    )]
    InvalidArgumentCount(usize),

    #[error(transparent)]
    Color(#[from] rgb::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type CliResult<T = ()> = Result<T, CliError>;
