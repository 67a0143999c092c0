use crate::error::Result;
use crate::git::StatusSource;

/// Status source returning a fixed report, for tests
pub struct MockStatus {
    report: String,
}

impl MockStatus {
    /// Create a mock with a raw status report
    pub fn new(report: impl Into<String>) -> Self {
        MockStatus {
            report: report.into(),
        }
    }

    /// Create a mock reporting a clean checkout of `branch`
    pub fn on_branch(branch: &str) -> Self {
        MockStatus::new(format!(
            "On branch {}\nnothing to commit, working tree clean\n",
            branch
        ))
    }
}

impl StatusSource for MockStatus {
    fn status_report(&self) -> Result<String> {
        Ok(self.report.clone())
    }
}
