use crate::error::AssetgenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flutter SDK version the generated code targets.
///
/// Field order matters: the derived `Ord` compares major, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TargetVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl TargetVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for TargetVersion {
    fn default() -> Self {
        Self::new(3, 0, 0)
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for TargetVersion {
    type Err = AssetgenError;

    /// Accepts `3`, `3.16` and `3.16.0`. Pre-release and build suffixes
    /// (`3.19.0-1.0.pre`, `3.19.0+hotfix`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let core = s
            .trim()
            .trim_start_matches(['v', 'V'])
            .split(['-', '+'])
            .next()
            .unwrap_or_default();

        let mut parts = [0u32; 3];
        let mut count = 0;
        for piece in core.split('.') {
            if count == parts.len() {
                return Err(AssetgenError::invalid_version(s));
            }
            parts[count] = piece
                .parse()
                .map_err(|_| AssetgenError::invalid_version(s))?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl TryFrom<String> for TargetVersion {
    type Error = AssetgenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TargetVersion> for String {
    fn from(version: TargetVersion) -> Self {
        version.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_and_partial_versions() {
        assert_eq!("3.16.2".parse::<TargetVersion>().unwrap(), TargetVersion::new(3, 16, 2));
        assert_eq!("3.7".parse::<TargetVersion>().unwrap(), TargetVersion::new(3, 7, 0));
        assert_eq!("2".parse::<TargetVersion>().unwrap(), TargetVersion::new(2, 0, 0));
        assert_eq!(" v3.10.0 ".parse::<TargetVersion>().unwrap(), TargetVersion::new(3, 10, 0));
    }

    #[test]
    fn test_parse_ignores_prerelease_suffix() {
        assert_eq!(
            "3.19.0-1.0.pre".parse::<TargetVersion>().unwrap(),
            TargetVersion::new(3, 19, 0)
        );
        assert_eq!(
            "3.19.0+hotfix.1".parse::<TargetVersion>().unwrap(),
            TargetVersion::new(3, 19, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<TargetVersion>().is_err());
        assert!("three".parse::<TargetVersion>().is_err());
        assert!("3.x".parse::<TargetVersion>().is_err());
        assert!("1.2.3.4".parse::<TargetVersion>().is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic_by_component() {
        assert!(TargetVersion::new(3, 10, 0) > TargetVersion::new(3, 9, 9));
        assert!(TargetVersion::new(4, 0, 0) > TargetVersion::new(3, 99, 99));
        assert!(TargetVersion::new(3, 7, 1) > TargetVersion::new(3, 7, 0));
    }

    #[test]
    fn test_display_roundtrips_through_string() {
        let version = TargetVersion::new(3, 24, 1);
        let text: String = version.into();
        assert_eq!(text, "3.24.1");
        assert_eq!(TargetVersion::try_from(text).unwrap(), version);
    }
}
