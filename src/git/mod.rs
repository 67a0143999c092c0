//! Source-control status access
//!
//! Branch classification only needs the textual status report of a checkout.
//! The [StatusSource] trait abstracts where that report comes from:
//!
//! - [repository::Git2Status]: reads HEAD through the `git2` crate
//! - [command::GitCommandStatus]: runs `git status` in a subprocess
//! - [mock::MockStatus]: canned report for tests

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommandStatus;
pub use mock::MockStatus;
pub use repository::Git2Status;

use crate::domain::branch::{branch_from_status, classify_branch, BranchType};
use crate::error::{ReleaseError, Result};
use std::path::Path;

/// Anything that can produce a `git status`-style report
///
/// The report must contain a line `On branch <name>` when a branch is checked
/// out; any other shape is treated as "no branch".
pub trait StatusSource {
    fn status_report(&self) -> Result<String>;
}

/// Classify the branch named in the status report of `source`.
///
/// # Returns
/// * `Ok(BranchType)` - `main`, `branch_<N>x` or `branch_<N>_<M>`
/// * `Err(StatusParse)` - The report has no `On branch` line
/// * `Err(UnsupportedBranch)` - Any other branch name
pub fn find_branch_type<S: StatusSource + ?Sized>(source: &S) -> Result<BranchType> {
    let report = source.status_report()?;
    let branch = branch_from_status(&report)?;

    classify_branch(&branch)?.ok_or_else(|| ReleaseError::UnsupportedBranch {
        script: invoking_script_name(),
        branch,
    })
}

/// Classify the branch checked out in the repository containing `repo_root`
pub fn current_branch_type(repo_root: &Path) -> Result<BranchType> {
    let status = Git2Status::open(repo_root)?;
    find_branch_type(&status)
}

/// File name of the running program, used in user-facing errors
pub fn invoking_script_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
        })
        .unwrap_or_else(|| "release script".to_string())
}
