use crate::error::Result;
use crate::git::StatusSource;
use crate::process;
use std::path::PathBuf;

/// Status source that shells out to `git status`
pub struct GitCommandStatus {
    cwd: Option<PathBuf>,
}

impl GitCommandStatus {
    /// Run `git status` in the current working directory
    pub fn new() -> Self {
        GitCommandStatus { cwd: None }
    }

    /// Run `git status` in `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        GitCommandStatus {
            cwd: Some(dir.into()),
        }
    }
}

impl Default for GitCommandStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSource for GitCommandStatus {
    fn status_report(&self) -> Result<String> {
        process::run("git status", self.cwd.as_deref())
    }
}
