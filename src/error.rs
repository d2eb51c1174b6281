use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Errors from building or evaluating a likelihood
#[derive(Clone, Debug, PartialEq)]
pub enum LikelihoodError {
    /// A required parameter had no value at evaluation time
    UnsetParameter(String),
    /// The parameter is not part of the likelihood's schema
    UnknownParameter(String),
    /// The noise standard deviation was non-positive or NaN
    InvalidNoise(f64),
    /// The model's prediction did not have one entry per data point
    ShapeMismatch {
        /// Number of data points
        expected: usize,
        /// Length of the model output
        found: usize,
    },
    /// Data (or per-point noise) given at construction disagree in length
    LengthMismatch {
        /// Number of data points
        expected: usize,
        /// Length of the offending sequence
        found: usize,
    },
    /// The model declared a name reserved for the noise parameter
    ReservedParameterName(String),
    /// The model declared the same parameter twice
    DuplicateParameter(String),
}

impl Display for LikelihoodError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            LikelihoodError::UnsetParameter(name) => {
                write!(f, "parameter `{}` has no value", name)
            }
            LikelihoodError::UnknownParameter(name) => {
                write!(f, "parameter `{}` is not known to this likelihood", name)
            }
            LikelihoodError::InvalidNoise(sigma) => {
                write!(f, "noise standard deviation must be positive, got {}", sigma)
            }
            LikelihoodError::ShapeMismatch { expected, found } => write!(
                f,
                "model returned {} values for {} data points",
                found, expected
            ),
            LikelihoodError::LengthMismatch { expected, found } => write!(
                f,
                "expected a sequence of length {}, got {}",
                expected, found
            ),
            LikelihoodError::ReservedParameterName(name) => {
                write!(f, "parameter name `{}` is reserved", name)
            }
            LikelihoodError::DuplicateParameter(name) => {
                write!(f, "parameter `{}` is declared more than once", name)
            }
        }
    }
}

impl Error for LikelihoodError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<LikelihoodError> for io::Error {
    fn from(e: LikelihoodError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}

/// Result type from likelihood operations
pub type Result<T> = std::result::Result<T, LikelihoodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_parameter() {
        let err = LikelihoodError::UnsetParameter("a".to_owned());
        assert_eq!(format!("{}", err), "parameter `a` has no value");
    }

    #[test]
    fn converts_into_io_error() {
        let err: io::Error = LikelihoodError::InvalidNoise(-1.0).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
