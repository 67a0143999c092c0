//! Domain logic - pure release rules independent of the filesystem and git

pub mod branch;
pub mod version;

pub use branch::{branch_from_status, classify_branch, BranchType};
pub use version::{ReleaseKind, Version};
