use crate::version::SemVer;
use std::fmt;

/// Main attributes stamped into the packaged artifact's manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestAttributes {
    pub implementation_title: String,
    pub implementation_version: String,
    pub runtime_profile: String,
}

impl ManifestAttributes {
    pub fn new(title: impl Into<String>, version: SemVer, profile: impl Into<String>) -> Self {
        ManifestAttributes {
            implementation_title: title.into(),
            implementation_version: version.to_string(),
            runtime_profile: profile.into(),
        }
    }
}

impl fmt::Display for ManifestAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Implementation-Title: {}", self.implementation_title)?;
        writeln!(f, "Implementation-Version: {}", self.implementation_version)?;
        writeln!(f, "Runtime-Profile: {}", self.runtime_profile)
    }
}
