use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XvError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
}

/// Reasons a value token is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Binary number too big, max 64 bits: {token}")]
    TooLong { token: String },

    #[error("Binary numbers can only contain 0 or 1: {token}")]
    InvalidDigit { token: String },

    #[error("Error in value {token}:{offset}")]
    InvalidSuffix { token: String, offset: usize },

    #[error("Value out of range, max 64 bits: {token}")]
    Overflow { token: String },
}

impl ParseError {
    pub fn token(&self) -> &str {
        match self {
            ParseError::TooLong { token }
            | ParseError::InvalidDigit { token }
            | ParseError::InvalidSuffix { token, .. }
            | ParseError::Overflow { token } => token,
        }
    }
}

impl XvError {
    /// Process exit status for this error.
    pub fn error_code(&self) -> u8 {
        match self {
            XvError::Parse(_) => 1,
            XvError::Io(_) => 74,
            XvError::Serialization(_) => 70,
        }
    }
}

pub type Result<T> = std::result::Result<T, XvError>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_error_reports_offset() {
        let err = ParseError::InvalidSuffix {
            token: "12xy".into(),
            offset: 2,
        };
        assert_eq!(err.to_string(), "Error in value 12xy:2");
        assert_eq!(err.token(), "12xy");
    }

    #[test]
    fn test_parse_error_maps_to_failure_code() {
        let err: XvError = ParseError::TooLong { token: "0b1".into() }.into();
        assert_eq!(err.error_code(), 1);
        assert!(err.to_string().contains("max 64 bits"));
    }
}
