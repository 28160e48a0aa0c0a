//! pysift - heuristic build metadata extraction for Python repositories
//!
//! This library reconstructs how to install and run an unfamiliar Python
//! repository by heuristically scanning known configuration file formats
//! (requirements files, environment specs, packaging manifests, CI config)
//! and free-text documentation. It backs an evaluation harness that must
//! set up arbitrary third-party repositories without human intervention.
//!
//! # Core Concepts
//!
//! - **Manifest discovery**: a read-only walk of the repository tree that
//!   groups candidate files under canonical filenames (the whole
//!   `requirements*` family files under `requirements.txt`)
//! - **Package normalization**: per-format parsers produce raw dependency
//!   strings which are validated, deduplicated and cleaned into one list
//! - **Version inference**: many redundant, noisy sources (docs, CI
//!   config, packaging metadata) reduce to a single best-guess Python
//!   version and repository version
//!
//! # Example Usage
//!
//! ```no_run
//! use pysift::{get_python_version_from_directory, get_repo_version, get_required_packages};
//! use std::path::Path;
//!
//! fn inspect(repo: &Path) -> Result<(), Box<dyn std::error::Error>> {
//!     let packages = get_required_packages(repo)?;
//!     println!("install: {} packages", packages.len());
//!
//!     if let Some(python) = get_python_version_from_directory(repo) {
//!         println!("python: {}", python);
//!     }
//!     println!("version: {}", get_repo_version(repo, "unknown"));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`scanner`]: directory walking and manifest discovery
//! - [`manifests`]: per-format dependency parsers and install commands
//! - [`packages`]: the package normalization pipeline
//! - [`versions`]: Python-version and repository-version inference
//! - [`instances`]: task-record ingestion for the harness
//!
//! # Error Behavior
//!
//! Package extraction fails loud on a malformed manifest: a repository
//! whose declared dependencies cannot be parsed is a signal, not noise.
//! Version inference is best-effort across many redundant sources and
//! never raises; it degrades to an absent result or the caller's default.

// Public modules
pub mod instances;
pub mod manifests;
pub mod packages;
pub mod scanner;
pub mod util;
pub mod versions;

// Re-export key operations for convenient access
pub use instances::{get_instances, TaskInstance};
pub use manifests::install::{install_command, suggest_install_commands};
pub use manifests::{parser_for, ManifestError};
pub use packages::{get_required_packages, get_required_packages_file, is_valid_package_name};
pub use scanner::{find_files, FoundFiles};
pub use versions::{
    find_version_files, get_python_version_from_directory, get_repo_version,
    get_repo_version_candidate, max_python_version,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
