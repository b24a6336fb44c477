use thiserror::Error;

/// Failures while turning external bytes into a `Buffer` or writing one out.
#[derive(Debug, Error)]
pub enum TextError {
    /// A record was not valid UTF-8. `line` is 1-based.
    #[error("invalid UTF-8 on line {line} (byte {offset} of the record)")]
    Decode { line: usize, offset: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
