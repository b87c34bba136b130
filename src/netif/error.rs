//! Interface bring-up errors.

use crate::credentials::CredentialsError;
use std::fmt;

/// Errors raised while validating an interface request.
///
/// Every variant is produced before the driver is touched; a request either
/// fails with no side effects or is carried out completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetifError {
    /// Override given on a build or board that cannot apply it.
    UnsupportedOverride { option: &'static str },
    /// Interface selector other than station (0) or access point (1).
    InvalidRole(i64),
    /// Pin identifier does not name a GPIO on this board.
    InvalidPin { option: &'static str, reason: String },
    /// Negative or oversized clock divisor part.
    InvalidClockDivisor { option: &'static str, value: i64 },
    /// Keyword not understood by the constructor.
    UnknownArgument(String),
    /// More than one interface selector.
    TooManyArguments,
    /// Value has the wrong type for its keyword.
    InvalidArgumentType {
        option: &'static str,
        expected: &'static str,
    },
    /// Board does not carry the WiFi co-processor.
    RadioUnavailable { board: &'static str },
    /// Board default AP credentials are not valid.
    InvalidCredentials(CredentialsError),
}

impl fmt::Display for NetifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedOverride { option } => {
                write!(f, "{} not supported on this board", option)
            }
            Self::InvalidRole(role) => write!(f, "invalid interface {}", role),
            Self::InvalidPin { option, reason } => write!(f, "invalid {}: {}", option, reason),
            Self::InvalidClockDivisor { option, value } => {
                write!(f, "invalid {}: {} out of range", option, value)
            }
            Self::UnknownArgument(name) => write!(f, "unexpected keyword argument '{}'", name),
            Self::TooManyArguments => write!(f, "too many interface arguments"),
            Self::InvalidArgumentType { option, expected } => {
                write!(f, "{} must be {}", option, expected)
            }
            Self::RadioUnavailable { board } => write!(f, "{} has no WiFi co-processor", board),
            Self::InvalidCredentials(e) => write!(f, "invalid default credentials: {}", e),
        }
    }
}

impl std::error::Error for NetifError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidCredentials(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CredentialsError> for NetifError {
    fn from(e: CredentialsError) -> Self {
        Self::InvalidCredentials(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            NetifError::UnsupportedOverride { option: "pin_cs" }.to_string(),
            "pin_cs not supported on this board"
        );
        assert_eq!(NetifError::InvalidRole(7).to_string(), "invalid interface 7");
        assert_eq!(
            NetifError::InvalidClockDivisor {
                option: "div_int",
                value: -1
            }
            .to_string(),
            "invalid div_int: -1 out of range"
        );
        assert_eq!(
            NetifError::UnknownArgument("pin_foo".into()).to_string(),
            "unexpected keyword argument 'pin_foo'"
        );
    }

    #[test]
    fn test_credentials_source() {
        let err = NetifError::from(CredentialsError::SsidEmpty);
        assert!(err.source().is_some());
        assert!(NetifError::TooManyArguments.source().is_none());
    }
}
