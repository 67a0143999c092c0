use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;

/// Line prefix naming the checked-out branch in a status report
pub const STATUS_BRANCH_PREFIX: &str = "On branch ";

/// Kind of branch a release script is running on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchType {
    /// `main`
    Unstable,
    /// `branch_<major>x`
    Stable,
    /// `branch_<major>_<minor>`
    Release,
}

impl BranchType {
    pub fn name(&self) -> &'static str {
        match self {
            BranchType::Unstable => "unstable",
            BranchType::Stable => "stable",
            BranchType::Release => "release",
        }
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pull the branch name out of a status report.
///
/// Only the first line starting with [`STATUS_BRANCH_PREFIX`] is consulted.
pub fn branch_from_status(report: &str) -> Result<String> {
    report
        .lines()
        .find_map(|line| line.strip_prefix(STATUS_BRANCH_PREFIX))
        .and_then(|rest| rest.split_whitespace().next())
        .map(|name| name.to_string())
        .ok_or_else(|| ReleaseError::status_parse("status report missing branch name"))
}

/// Classify a branch name, or `None` for feature branches and anything else unrecognized
pub fn classify_branch(name: &str) -> Result<Option<BranchType>> {
    if name == "main" {
        return Ok(Some(BranchType::Unstable));
    }

    let stable = Regex::new(r"^branch_(\d+)x")?;
    if stable.is_match(name) {
        return Ok(Some(BranchType::Stable));
    }

    let release = Regex::new(r"^branch_(\d+)_(\d+)")?;
    if release.is_match(name) {
        return Ok(Some(BranchType::Release));
    }

    Ok(None)
}
