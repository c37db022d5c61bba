use thiserror::Error;

/// Address and hex formatting errors.
#[derive(Debug, Error)]
pub enum UtilsError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid utf-8: {0}")]
    InvalidUtf8(String),

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error("invalid abi: {0}")]
    InvalidAbi(String),
}
