use thiserror::Error;

/// Errors raised by the subnet arithmetic.
///
/// This is the only failure the aggregation core reports synchronously. A
/// caller receiving it must treat the whole computation as unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrError {
    #[error("invalid CIDR '{input}': {reason}")]
    InvalidCidr { input: String, reason: CidrFault },
}

impl CidrError {
    pub(crate) fn invalid(input: &str, reason: CidrFault) -> Self {
        Self::InvalidCidr {
            input: input.to_string(),
            reason,
        }
    }

    pub fn reason(&self) -> &CidrFault {
        match self {
            Self::InvalidCidr { reason, .. } => reason,
        }
    }
}

/// The specific defect found in a CIDR string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrFault {
    #[error("expected '<ipv4>/<prefix>'")]
    MissingPrefix,
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),
    #[error("octet '{0}' is not a number")]
    NonNumericOctet(String),
    #[error("octet {0} is outside 0-255")]
    OctetOutOfRange(String),
    #[error("prefix '{0}' is not a number")]
    NonNumericPrefix(String),
    #[error("prefix {0} is outside 0-32")]
    PrefixOutOfRange(String),
}
