//! Solidity compiler release identifiers.
//!
//! Declarations pin an exact `MAJOR.MINOR.PATCH` release. Parsing is strict:
//! semver ranges, `v` prefixes, and zero-padded components are rejected so a
//! typo never resolves to a different compiler than the author intended.

use std::fmt;
use std::str::FromStr;

use crate::validate::ConfigError;

/// A parsed Solidity compiler release identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolcVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Known release lines as `(minor, newest patch)` pairs. Every published solc
/// release has major version 0.
const SUPPORTED_RELEASES: &[(u32, u32)] = &[(4, 26), (5, 17), (6, 12), (7, 6), (8, 28)];

impl SolcVersion {
    /// Parse a canonical `MAJOR.MINOR.PATCH` release string.
    ///
    /// Rejects the empty string, whitespace, `v` prefixes, semver range
    /// operators, zero-padded components, and anything that is not exactly
    /// three dot-separated decimal numbers.
    pub fn parse(value: &str) -> Result<SolcVersion, ConfigError> {
        if value.is_empty() {
            return Err(invalid(value, "version must not be empty"));
        }

        if value.trim() != value {
            return Err(invalid(value, "version must not contain whitespace"));
        }

        if value.starts_with('v') || value.starts_with('V') {
            return Err(invalid(value, "drop the 'v' prefix, e.g. \"0.8.17\""));
        }

        if value.starts_with(['^', '~', '>', '<', '=', '*']) || value.contains(' ') {
            return Err(invalid(
                value,
                "version ranges are not supported, pin an exact release",
            ));
        }

        let mut parts = value.split('.');
        let (major, minor, patch) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), Some(patch), None) => (major, minor, patch),
            _ => return Err(invalid(value, "expected MAJOR.MINOR.PATCH")),
        };

        Ok(SolcVersion {
            major: parse_component(value, major)?,
            minor: parse_component(value, minor)?,
            patch: parse_component(value, patch)?,
        })
    }

    /// Whether this release exists in the known-release registry.
    pub fn is_supported_release(&self) -> bool {
        if self.major != 0 {
            return false;
        }
        SUPPORTED_RELEASES
            .iter()
            .any(|&(minor, newest)| self.minor == minor && self.patch <= newest)
    }

    /// Newest release in the registry.
    pub fn latest_supported() -> SolcVersion {
        // SUPPORTED_RELEASES is ordered; the last entry is the newest line.
        let &(minor, patch) = SUPPORTED_RELEASES.last().unwrap_or(&(8, 0));
        SolcVersion {
            major: 0,
            minor,
            patch,
        }
    }
}

fn parse_component(version: &str, component: &str) -> Result<u32, ConfigError> {
    if component.is_empty() {
        return Err(invalid(version, "expected MAJOR.MINOR.PATCH"));
    }

    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(version, "components must be decimal numbers"));
    }

    if component.len() > 1 && component.starts_with('0') {
        return Err(invalid(version, "zero-padded components are not allowed"));
    }

    component
        .parse::<u32>()
        .map_err(|_| invalid(version, "component out of range"))
}

fn invalid(value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidVersion {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl fmt::Display for SolcVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SolcVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SolcVersion::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Parsing accepts canonical releases ────────────────────────────

    #[test]
    fn parse_canonical() {
        let v = SolcVersion::parse("0.8.17").unwrap();
        assert_eq!(
            v,
            SolcVersion {
                major: 0,
                minor: 8,
                patch: 17
            }
        );
    }

    #[test]
    fn parse_zero_patch() {
        let v = SolcVersion::parse("0.5.0").unwrap();
        assert_eq!(v.patch, 0);
    }

    #[test]
    fn display_roundtrip() {
        let v = SolcVersion::parse("0.8.17").unwrap();
        assert_eq!(v.to_string(), "0.8.17");
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: SolcVersion = "0.7.6".parse().unwrap();
        assert_eq!(parsed, SolcVersion::parse("0.7.6").unwrap());
    }

    // ── Parsing rejects malformed input ───────────────────────────────

    #[test]
    fn reject_empty() {
        let err = SolcVersion::parse("").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidVersion { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn reject_whitespace() {
        assert!(SolcVersion::parse(" 0.8.17").is_err());
        assert!(SolcVersion::parse("0.8.17 ").is_err());
    }

    #[test]
    fn reject_v_prefix() {
        let err = SolcVersion::parse("v0.8.17").unwrap_err();
        assert!(err.to_string().contains("prefix"));
    }

    #[test]
    fn reject_range_operators() {
        assert!(SolcVersion::parse("^0.8.17").is_err());
        assert!(SolcVersion::parse("~0.8.0").is_err());
        assert!(SolcVersion::parse(">=0.8.0").is_err());
        assert!(SolcVersion::parse("*").is_err());
    }

    #[test]
    fn reject_wrong_arity() {
        assert!(SolcVersion::parse("0.8").is_err());
        assert!(SolcVersion::parse("0.8.17.1").is_err());
        assert!(SolcVersion::parse("0").is_err());
    }

    #[test]
    fn reject_empty_component() {
        assert!(SolcVersion::parse("0..17").is_err());
        assert!(SolcVersion::parse("0.8.").is_err());
        assert!(SolcVersion::parse(".8.17").is_err());
    }

    #[test]
    fn reject_non_numeric() {
        assert!(SolcVersion::parse("0.8.x").is_err());
        assert!(SolcVersion::parse("a.b.c").is_err());
        assert!(SolcVersion::parse("0.8.1rc1").is_err());
    }

    #[test]
    fn reject_zero_padded() {
        assert!(SolcVersion::parse("0.08.17").is_err());
        assert!(SolcVersion::parse("0.8.017").is_err());
        // A lone zero component is fine
        assert!(SolcVersion::parse("0.8.0").is_ok());
    }

    #[test]
    fn reject_out_of_range_component() {
        assert!(SolcVersion::parse("0.8.99999999999999999999").is_err());
    }

    #[test]
    fn reject_negative() {
        assert!(SolcVersion::parse("-0.8.17").is_err());
        assert!(SolcVersion::parse("0.-8.17").is_err());
    }

    // ── Release registry ──────────────────────────────────────────────

    #[test]
    fn known_releases_supported() {
        for v in ["0.4.26", "0.5.17", "0.6.12", "0.7.6", "0.8.0", "0.8.17", "0.8.28"] {
            assert!(
                SolcVersion::parse(v).unwrap().is_supported_release(),
                "{} should be supported",
                v
            );
        }
    }

    #[test]
    fn unknown_releases_rejected() {
        for v in ["0.8.29", "0.9.0", "0.3.6", "1.0.0", "9.9.9"] {
            assert!(
                !SolcVersion::parse(v).unwrap().is_supported_release(),
                "{} should not be supported",
                v
            );
        }
    }

    #[test]
    fn latest_supported_is_registered() {
        assert!(SolcVersion::latest_supported().is_supported_release());
    }

    // ── Ordering ──────────────────────────────────────────────────────

    #[test]
    fn ordering_by_component() {
        let a = SolcVersion::parse("0.7.6").unwrap();
        let b = SolcVersion::parse("0.8.0").unwrap();
        let c = SolcVersion::parse("0.8.17").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn invalid_version_error_code() {
        let err = SolcVersion::parse("bogus").unwrap_err();
        assert_eq!(err.code(), 62);
    }
}
