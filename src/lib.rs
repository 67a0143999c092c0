pub mod config;
pub mod domain;
pub mod download;
pub mod edit;
pub mod error;
pub mod git;
pub mod process;
pub mod properties;
pub mod ui;

pub use domain::{BranchType, ReleaseKind, Version};
pub use edit::{update_file, update_file_with_append, EditOutcome};
pub use error::{ReleaseError, Result};
