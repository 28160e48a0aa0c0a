//! Recognized manifest filenames and grouping rules

/// Manifest files that feed the package normalizer
pub const DEPENDENCY_MANIFESTS: &[&str] = &[
    "requirements.txt",
    "environment.yml",
    "setup.py",
    "pyproject.toml",
];

/// Manifest files reported to callers that want paths rather than packages.
///
/// tox.ini is located but never parsed into packages.
pub const LOCATABLE_MANIFESTS: &[&str] = &[
    "requirements.txt",
    "environment.yml",
    "setup.py",
    "pyproject.toml",
    "tox.ini",
];

/// Prefix family collapsed into the `requirements.txt` canonical key
pub const REQUIREMENTS_PREFIX: &str = "requirements";

/// Canonical key for the requirements prefix family
pub const REQUIREMENTS_CANONICAL: &str = "requirements.txt";

/// Resolves the canonical key a filename is grouped under, if any.
///
/// An exact target match keeps its own name; any other file starting with
/// the `requirements` prefix (e.g. `requirements-dev.txt`) is filed under
/// `requirements.txt` whether or not that key was requested.
pub fn canonical_key<'a>(filename: &'a str, targets: &[&str]) -> Option<&'a str> {
    if targets.iter().any(|target| *target == filename) {
        Some(filename)
    } else if filename.starts_with(REQUIREMENTS_PREFIX) {
        Some(REQUIREMENTS_CANONICAL)
    } else {
        None
    }
}
