use crate::error::{Result, VermanError};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemVer {
    /// The starting version used when no version has ever been persisted.
    pub const ZERO: SemVer = SemVer {
        major: 0,
        minor: 0,
        patch: 0,
    };

    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemVer {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from its stored string form (e.g., "1.2.3").
    ///
    /// Expects exactly three dot-separated non-negative integers. Anything
    /// else fails with [VermanError::MalformedVersion] naming the raw input.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(VermanError::malformed_version(raw));
        }

        let major = parts[0]
            .parse::<u32>()
            .map_err(|_| VermanError::malformed_version(raw))?;
        let minor = parts[1]
            .parse::<u32>()
            .map_err(|_| VermanError::malformed_version(raw))?;
        let patch = parts[2]
            .parse::<u32>()
            .map_err(|_| VermanError::malformed_version(raw))?;

        Ok(SemVer {
            major,
            minor,
            patch,
        })
    }

    /// Compute the next version for the given increment kind.
    ///
    /// Incrementing a higher-order component resets all lower-order
    /// components to zero:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn bumped(&self, kind: IncrementKind) -> Self {
        match kind {
            IncrementKind::Major => SemVer {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            IncrementKind::Minor => SemVer {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            IncrementKind::Patch => SemVer {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of a semantic version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementKind {
    Major,
    Minor,
    Patch,
}
