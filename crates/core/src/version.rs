use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Error for version strings that do not parse as `X.Y.Z`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid version {input:?}: expected three dot-separated integers")]
pub struct ParseVersionError {
    input: String,
}

/// A `major.minor.sub` release version.
///
/// Components are non-negative integers with no upper bound beyond `u64`;
/// pre-release and build-metadata suffixes are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub sub: u64,
}

impl FromStr for VersionTriple {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError {
            input: s.to_string(),
        };
        let mut parts = s.split('.');
        let (major, minor, sub) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), Some(sub), None) => (major, minor, sub),
            _ => return Err(invalid()),
        };
        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
            sub: sub.parse().map_err(|_| invalid())?,
        })
    }
}

impl Display for VersionTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.sub)
    }
}
