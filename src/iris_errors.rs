use thiserror::Error;

use crate::constants::FRAME_SIZE;

#[derive(Error, Debug)]
pub enum IrisError {
    #[error("Truncated input: expected a frame of {expected} bytes, found {found} bytes")]
    TruncatedInput { expected: usize, found: usize },

    #[error("Unrecognized record type tag: {0}")]
    UnrecognizedRecordType(u32),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error during the nom parsing: {0}")]
    NomParsingError(String),
}

impl IrisError {
    /// Build a [`IrisError::TruncatedInput`] for a frame of `found` bytes.
    pub fn truncated(found: usize) -> Self {
        IrisError::TruncatedInput {
            expected: FRAME_SIZE,
            found,
        }
    }
}

impl<E: std::fmt::Debug> From<nom::Err<E>> for IrisError {
    fn from(err: nom::Err<E>) -> Self {
        IrisError::NomParsingError(format!("{err:?}"))
    }
}

impl PartialEq for IrisError {
    fn eq(&self, other: &Self) -> bool {
        use IrisError::*;
        match (self, other) {
            (
                TruncatedInput {
                    expected: a,
                    found: b,
                },
                TruncatedInput {
                    expected: c,
                    found: d,
                },
            ) => a == c && b == d,
            (UnrecognizedRecordType(a), UnrecognizedRecordType(b)) => a == b,
            (NomParsingError(a), NomParsingError(b)) => a == b,

            // io::Error is not comparable: same variant is enough
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}

#[cfg(test)]
mod test_iris_errors {
    use super::*;

    #[test]
    fn test_truncated_message() {
        let err = IrisError::truncated(12);
        assert_eq!(
            err.to_string(),
            "Truncated input: expected a frame of 3572 bytes, found 12 bytes"
        );
        assert_eq!(
            err,
            IrisError::TruncatedInput {
                expected: 3572,
                found: 12
            }
        );
    }

    #[test]
    fn test_io_errors_compare_by_variant() {
        let a = IrisError::from(std::io::Error::other("a"));
        let b = IrisError::from(std::io::Error::other("b"));
        assert_eq!(a, b);
        assert_ne!(a, IrisError::UnrecognizedRecordType(0));
    }
}
