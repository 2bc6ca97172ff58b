//! Path parameters of the code viewer route.
//!
//! Both types are only constructible through validation, so a value that
//! reaches the upstream client is always safe to place in a path segment.

use std::fmt;
use std::str::FromStr;

use crate::error::ProxyError;

/// Building-code family accepted by the upstream viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeType {
    /// Korea Design Standard.
    Kds,
    /// Korea Construction Specification.
    Kcs,
    /// Korea Waterworks Construction Specification.
    Kwcs,
}

impl CodeType {
    pub const ALL: [CodeType; 3] = [CodeType::Kds, CodeType::Kcs, CodeType::Kwcs];

    pub fn as_str(&self) -> &'static str {
        match self {
            CodeType::Kds => "KDS",
            CodeType::Kcs => "KCS",
            CodeType::Kwcs => "KWCS",
        }
    }
}

impl FromStr for CodeType {
    type Err = ProxyError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or(ProxyError::InvalidCodeType)
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric code identifier such as `111000`.
///
/// Non-empty and made only of ASCII digits. Leading zeros are kept, the
/// value is an identifier, not a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeNumber(String);

impl CodeNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CodeNumber {
    type Err = ProxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(ProxyError::InvalidCode)
        }
    }
}

impl fmt::Display for CodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
