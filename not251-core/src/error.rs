use std::fmt;

/// Errors raised by vector construction and the rotation searches.
///
/// `auto_mode` never produces one of these for a missing mode; that case is
/// reported through [`crate::search::ModeSearch::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VectorError {
    /// The operation needs at least one element.
    Empty { operation: &'static str },
    /// Moduli must be strictly positive.
    InvalidModulo(i64),
    /// A search anchored on `span` was handed a zero span.
    ZeroSpan { operation: &'static str },
    /// Inverse selection found no scale degree with this value.
    DegreeNotFound { value: i64 },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::Empty { operation } => {
                write!(f, "{} requires a non-empty vector", operation)
            }
            VectorError::InvalidModulo(modulo) => {
                write!(f, "Modulo must be positive, got {}", modulo)
            }
            VectorError::ZeroSpan { operation } => {
                write!(f, "{} requires a non-zero span", operation)
            }
            VectorError::DegreeNotFound { value } => {
                write!(f, "No scale degree matches the value {}", value)
            }
        }
    }
}

impl std::error::Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VectorError::Empty {
            operation: "PositionVector::new",
        };
        assert_eq!(
            err.to_string(),
            "PositionVector::new requires a non-empty vector"
        );
        assert_eq!(
            VectorError::DegreeNotFound { value: 61 }.to_string(),
            "No scale degree matches the value 61"
        );
    }
}
