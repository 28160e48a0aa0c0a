//! Version inference
//!
//! Best-effort extraction of a Python interpreter version and a
//! self-declared repository version from many redundant, noisy sources.
//! Nothing on these paths raises: unreadable or malformed files contribute
//! no candidates, and an empty candidate set yields an absent result.

pub mod python;
pub mod repo;

pub use python::{get_python_version_from_directory, max_python_version};
pub use repo::{find_version_files, get_repo_version, get_repo_version_candidate};
