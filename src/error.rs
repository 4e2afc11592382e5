use thiserror::Error;

/// Errors that can occur while running a tidepool game
#[derive(Error, Debug)]
pub enum TidepoolError {
    /// Error reading or parsing configuration
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// The input stream ended before the game reached a conclusion
    #[error("input stream closed before the game finished")]
    InputClosed,

    /// Error reading from the input stream
    #[error("failed to read input: {0}")]
    InputError(#[source] std::io::Error),

    /// Error writing to the output sink
    #[error("failed to write output: {0}")]
    OutputError(#[source] std::io::Error),
}

/// Result type alias for tidepool operations
pub type Result<T> = std::result::Result<T, TidepoolError>;
