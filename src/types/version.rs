//! Safe contract versions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contracts::{HashingConstants, HASHING_V0_1_0, HASHING_V1_0_0, HASHING_V1_3_0};
use crate::error::{Error, Result};

/// Semantic version of a deployed Safe singleton
///
/// Build metadata such as the `+L2` suffix is accepted when parsing and
/// dropped, since L2 singletons share the hashing scheme of their base version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SafeVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl SafeVersion {
    pub const V0_1_0: Self = Self::new(0, 1, 0);
    pub const V1_0_0: Self = Self::new(1, 0, 0);
    pub const V1_1_1: Self = Self::new(1, 1, 1);
    pub const V1_2_0: Self = Self::new(1, 2, 0);
    pub const V1_3_0: Self = Self::new(1, 3, 0);
    pub const V1_4_1: Self = Self::new(1, 4, 1);

    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns the EIP-712 constants the contract at this version hashes with
    pub fn hashing_constants(&self) -> &'static HashingConstants {
        if *self < Self::V1_0_0 {
            &HASHING_V0_1_0
        } else if *self < Self::V1_3_0 {
            &HASHING_V1_0_0
        } else {
            &HASHING_V1_3_0
        }
    }

    /// Returns true if the domain separator commits to the chain id
    pub fn includes_chain_id(&self) -> bool {
        self.hashing_constants().include_chain_id
    }
}

impl fmt::Display for SafeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SafeVersion {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedVersion(text.to_string());

        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let core = trimmed.split_once('+').map_or(trimmed, |(core, _)| core);

        let mut parts = core.split('.');
        let mut next = || -> Result<u16> {
            let part = parts.next().ok_or_else(unsupported)?;
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(unsupported());
            }
            part.parse().map_err(|_| unsupported())
        };
        let version = Self::new(next()?, next()?, next()?);

        if parts.next().is_some() || version.major > 1 {
            return Err(unsupported());
        }
        Ok(version)
    }
}

impl TryFrom<String> for SafeVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SafeVersion> for String {
    fn from(version: SafeVersion) -> Self {
        version.to_string()
    }
}
