//! Manifest format parsers
//!
//! One parser per recognized manifest format. Each takes a file path and
//! returns the raw dependency strings in file order; duplicates and invalid
//! tokens pass through and are filtered by the package normalizer.
//!
//! Read and syntax failures propagate as [`ManifestError`]: a manifest that
//! cannot be parsed is a correctness signal about the repository under
//! inspection, and callers decide per filename whether to skip it.

pub mod environment;
pub mod install;
pub mod pyproject;
pub mod requirements;
pub mod setup_py;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or parsing a dependency manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structured YAML document failed to parse
    #[error("failed to parse YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Structured TOML document failed to parse
    #[error("failed to parse TOML in {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parser signature shared by all manifest formats
pub type ParserFn = fn(&Path) -> Result<Vec<String>, ManifestError>;

/// Dispatch table from canonical filename to parser.
///
/// Returns `None` for recognized locate-only filenames (tox.ini), which
/// never contribute packages.
pub fn parser_for(canonical: &str) -> Option<ParserFn> {
    match canonical {
        "requirements.txt" => Some(requirements::parse_requirements_txt as ParserFn),
        "environment.yml" => Some(environment::parse_environment_yml as ParserFn),
        "setup.py" => Some(setup_py::parse_setup_py as ParserFn),
        "pyproject.toml" => Some(pyproject::parse_pyproject_toml as ParserFn),
        _ => None,
    }
}

pub(crate) fn read_to_string(path: &Path) -> Result<String, ManifestError> {
    std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}
