//! Target platform (Kubernetes control plane) version

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A malformed platform version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid platform version '{input}': {reason}")]
pub struct VersionParseError {
    pub input: String,
    pub reason: String,
}

/// Kubernetes version as a (major, minor, patch) triple
///
/// Cluster versions often carry vendor suffixes (`v1.27.3-eks-2f008fe`,
/// `v1.21.1+k3s1`). Those are accepted and ignored, so `1.19.0-gke.1`
/// compares equal to `1.19.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl PlatformVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version such as `1.20.0`, `v1.20`, or `v1.27.3-eks-2f008fe`
    pub fn parse(input: &str) -> Result<Self, VersionParseError> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let core_end = body.find(|c| c == '-' || c == '+').unwrap_or(body.len());
        let (core, suffix) = body.split_at(core_end);

        // Kubernetes tooling commonly reports `major.minor` only
        let core = if core.matches('.').count() == 1 {
            format!("{}.0", core)
        } else {
            core.to_string()
        };

        let parsed = semver::Version::parse(&format!("{}{}", core, suffix)).map_err(|e| {
            VersionParseError {
                input: input.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self::new(parsed.major, parsed.minor, parsed.patch))
    }
}

/// Target version used when none is given
impl Default for PlatformVersion {
    fn default() -> Self {
        Self::new(1, 28, 0)
    }
}

impl FromStr for PlatformVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for PlatformVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlatformVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
