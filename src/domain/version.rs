use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Separator used between version components in generated matchers
pub const DEFAULT_SEPARATOR: &str = r"\.";

const VERSION_PATTERN: &str = r"(\d+)\.(\d+).(\d+)(.1|.2)?";

/// Release version: major.minor.bugfix plus a prerelease marker (0, 1 or 2)
///
/// Field order matters: the derived ordering compares major, minor, bugfix and
/// then prerelease, which is exactly [`Version::on_or_after`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub bugfix: u32,
    pub prerelease: u32,
}

/// Which component a release most recently incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseKind {
    Major,
    Minor,
    Bugfix,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, bugfix: u32, prerelease: u32) -> Self {
        Version {
            major,
            minor,
            bugfix,
            prerelease,
        }
    }

    /// Extract the first version found anywhere in `value`.
    ///
    /// Surrounding text is ignored, so "lucene-9.1.2" and "Version 9.1.2.1 (rc)" both
    /// parse. A trailing `.1` or `.2` becomes the prerelease marker.
    pub fn parse(value: &str) -> Result<Self> {
        let re = Regex::new(VERSION_PATTERN)?;
        let caps = re.captures(value).ok_or_else(|| {
            ReleaseError::format(format!(
                "Version argument must be of format x.y.z(.1|.2)?, got '{}'",
                value
            ))
        })?;

        let component = |idx: usize| -> Result<u32> {
            let text = &caps[idx];
            text.parse::<u32>().map_err(|_| {
                ReleaseError::format(format!("Version component out of range: {}", text))
            })
        };

        let prerelease = match caps.get(4).map(|m| m.as_str()) {
            None => 0,
            Some(marker) if marker.ends_with('1') => 1,
            Some(_) => 2,
        };

        Ok(Version::new(component(1)?, component(2)?, component(3)?, prerelease))
    }

    /// Canonical dotted form, without the prerelease marker
    pub fn dot(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.bugfix)
    }

    /// Symbolic constant name used in source files, e.g. `LUCENE_9_1_2`
    pub fn constant(&self) -> String {
        format!("LUCENE_{}_{}_{}", self.major, self.minor, self.bugfix)
    }

    pub fn release_kind(&self) -> ReleaseKind {
        if self.bugfix != 0 {
            ReleaseKind::Bugfix
        } else if self.minor != 0 {
            ReleaseKind::Minor
        } else {
            ReleaseKind::Major
        }
    }

    pub fn is_bugfix_release(&self) -> bool {
        self.bugfix != 0
    }

    pub fn is_minor_release(&self) -> bool {
        self.bugfix == 0 && self.minor != 0
    }

    pub fn is_major_release(&self) -> bool {
        self.bugfix == 0 && self.minor == 0
    }

    /// Matcher for the dotted form of the previous version
    pub fn previous_dot_matcher(&self) -> Result<Regex> {
        self.make_previous_matcher("", "", DEFAULT_SEPARATOR)
    }

    /// Build a regex matching the identifier of the release preceding this one.
    ///
    /// * bugfix release `M.m.b` matches exactly `M.m.(b-1)`
    /// * minor release `M.m.0` matches any `M.(m-1).N`
    /// * major release `M.0.0` matches any `(M-1).N.N`
    ///
    /// The version part is wrapped in a capture group (group 1) between the raw
    /// `prefix` and `suffix` fragments; `sep` is placed between components.
    pub fn make_previous_matcher(&self, prefix: &str, suffix: &str, sep: &str) -> Result<Regex> {
        let no_previous =
            || ReleaseError::format(format!("Version {} has no previous version", self));

        let pattern = match self.release_kind() {
            ReleaseKind::Bugfix => format!(
                "{}{}{}{}{}",
                self.major,
                sep,
                self.minor,
                sep,
                self.bugfix - 1
            ),
            ReleaseKind::Minor => format!(
                r"{}{}{}{}\d+",
                self.major,
                sep,
                self.minor - 1,
                sep
            ),
            ReleaseKind::Major => {
                let major = self.major.checked_sub(1).ok_or_else(no_previous)?;
                format!(r"{}{}\d+{}\d+", major, sep, sep)
            }
        };

        Ok(Regex::new(&format!("{}({}){}", prefix, pattern, suffix))?)
    }

    /// True if this version is at or after `other`, prerelease marker included
    pub fn on_or_after(&self, other: &Version) -> bool {
        self >= other
    }

    /// Strictly greater on (major, minor, bugfix); the prerelease marker is ignored
    pub fn gt(&self, other: &Version) -> bool {
        (self.major, self.minor, self.bugfix) > (other.major, other.minor, other.bugfix)
    }

    /// Whether `other` falls inside the one-major-version back-compat window.
    ///
    /// Only defined when this version is on or after `other`.
    pub fn is_back_compat_with(&self, other: &Version) -> Result<bool> {
        if !self.on_or_after(other) {
            return Err(ReleaseError::Precondition {
                current: self.to_string(),
                other: other.to_string(),
            });
        }
        Ok(u64::from(other.major) + 1 >= u64::from(self.major))
    }
}

impl FromStr for Version {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("9.1.2").unwrap();
        assert_eq!(v, Version::new(9, 1, 2, 0));
    }

    #[test]
    fn test_version_parse_with_surrounding_text() {
        let v = Version::parse("lucene-solr-10.0.0-src.tgz").unwrap();
        assert_eq!(v, Version::new(10, 0, 0, 0));
    }

    #[test]
    fn test_version_parse_prerelease() {
        assert_eq!(Version::parse("9.0.0.1").unwrap().prerelease, 1);
        assert_eq!(Version::parse("9.0.0.2").unwrap().prerelease, 2);
        assert_eq!(Version::parse("9.0.0").unwrap().prerelease, 0);
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(matches!(
            Version::parse("1.2"),
            Err(ReleaseError::Format(_))
        ));
        assert!(Version::parse("no version here").is_err());
        assert!(Version::parse("99999999999.0.0").is_err());
    }

    #[test]
    fn test_version_from_str() {
        let v: Version = "v8.11.3".parse().unwrap();
        assert_eq!(v, Version::new(8, 11, 3, 0));
    }

    #[test]
    fn test_version_display_omits_prerelease() {
        let v = Version::new(9, 0, 0, 2);
        assert_eq!(v.to_string(), "9.0.0");
        assert_eq!(v.dot(), "9.0.0");
    }

    #[test]
    fn test_version_constant() {
        assert_eq!(Version::new(9, 1, 2, 0).constant(), "LUCENE_9_1_2");
    }

    #[test]
    fn test_release_kind() {
        assert_eq!(Version::new(9, 1, 2, 0).release_kind(), ReleaseKind::Bugfix);
        assert_eq!(Version::new(9, 1, 0, 0).release_kind(), ReleaseKind::Minor);
        assert_eq!(Version::new(9, 0, 0, 0).release_kind(), ReleaseKind::Major);
        assert_eq!(Version::new(9, 0, 3, 0).release_kind(), ReleaseKind::Bugfix);
    }

    #[test]
    fn test_release_classification_is_exclusive() {
        for major in 0..3 {
            for minor in 0..3 {
                for bugfix in 0..3 {
                    let v = Version::new(major, minor, bugfix, 0);
                    let flags = [
                        v.is_major_release(),
                        v.is_minor_release(),
                        v.is_bugfix_release(),
                    ];
                    assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{}", v);
                }
            }
        }
    }

    #[test]
    fn test_previous_matcher_bugfix() {
        let re = Version::new(9, 1, 2, 0).previous_dot_matcher().unwrap();
        assert_eq!(&re.captures("version=9.1.1").unwrap()[1], "9.1.1");
        assert!(!re.is_match("9.1.0"));
        assert!(!re.is_match("9.1.2"));
    }

    #[test]
    fn test_previous_matcher_minor() {
        let re = Version::new(9, 2, 0, 0).previous_dot_matcher().unwrap();
        assert_eq!(&re.captures("9.1.17").unwrap()[1], "9.1.17");
        assert!(!re.is_match("9.2.0"));
        assert!(!re.is_match("8.1.0"));
    }

    #[test]
    fn test_previous_matcher_major() {
        let re = Version::new(10, 0, 0, 0).previous_dot_matcher().unwrap();
        assert_eq!(&re.captures("9.11.2").unwrap()[1], "9.11.2");
        assert!(!re.is_match("10.0.0"));
    }

    #[test]
    fn test_previous_matcher_prefix_suffix_and_separator() {
        let re = Version::new(9, 1, 2, 0)
            .make_previous_matcher(r"Version\.LUCENE_", ";", "_")
            .unwrap();
        let caps = re.captures("  Version.LUCENE_9_1_1;").unwrap();
        assert_eq!(&caps[1], "9_1_1");
        assert!(!re.is_match("Version.LUCENE_9_1_1,"));
    }

    #[test]
    fn test_previous_matcher_first_major_has_no_previous() {
        let err = Version::new(0, 0, 0, 0).previous_dot_matcher().unwrap_err();
        assert!(matches!(err, ReleaseError::Format(_)));
    }

    #[test]
    fn test_on_or_after_compares_prerelease() {
        let rc1 = Version::new(9, 0, 0, 1);
        let rc2 = Version::new(9, 0, 0, 2);
        assert!(rc2.on_or_after(&rc1));
        assert!(!rc1.on_or_after(&rc2));
        assert!(rc1.on_or_after(&rc1));
    }

    #[test]
    fn test_gt_ignores_prerelease() {
        let rc1 = Version::new(9, 0, 0, 1);
        let rc2 = Version::new(9, 0, 0, 2);
        assert!(!rc2.gt(&rc1));
        assert!(Version::new(9, 0, 1, 0).gt(&rc2));
        assert!(Version::new(10, 0, 0, 0).gt(&Version::new(9, 9, 9, 0)));
    }

    #[test]
    fn test_back_compat_window() {
        let v9 = Version::new(9, 1, 0, 0);
        assert!(v9.is_back_compat_with(&Version::new(8, 5, 0, 0)).unwrap());
        let v10 = Version::new(10, 0, 0, 0);
        assert!(!v10.is_back_compat_with(&Version::new(8, 0, 0, 0)).unwrap());
        assert!(v10.is_back_compat_with(&v10).unwrap());
    }

    #[test]
    fn test_back_compat_with_newer_version_fails() {
        let err = Version::new(8, 0, 0, 0)
            .is_back_compat_with(&Version::new(9, 0, 0, 0))
            .unwrap_err();
        assert!(matches!(err, ReleaseError::Precondition { .. }));
    }
}
