use crate::domain::branch::STATUS_BRANCH_PREFIX;
use crate::error::Result;
use crate::git::StatusSource;
use git2::{ErrorCode, Repository};
use std::path::Path;

/// Status source backed by a `git2` repository handle
///
/// Produces only the first line of what `git status` would print, which is all
/// branch classification reads.
pub struct Git2Status {
    repo: Repository,
}

impl Git2Status {
    /// Open or discover the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2Status { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Status { repo }
    }

    fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(|s| s.to_string())),
            Ok(_) => Ok(None),
            // Fresh repository: HEAD names a branch with no commits yet
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(|s| s.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl StatusSource for Git2Status {
    fn status_report(&self) -> Result<String> {
        if let Some(branch) = self.current_branch()? {
            return Ok(format!("{}{}\n", STATUS_BRANCH_PREFIX, branch));
        }

        let head = self.repo.head()?;
        let short = head
            .target()
            .map(|oid| oid.to_string().chars().take(7).collect::<String>())
            .unwrap_or_else(|| "(unknown)".to_string());
        Ok(format!("HEAD detached at {}\n", short))
    }
}
