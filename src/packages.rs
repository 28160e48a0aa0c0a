//! Package list normalization
//!
//! Collapses every discovered dependency manifest into one ordered,
//! validated, deduplicated package list. Parse failures on individual
//! manifests propagate to the caller; invalid tokens are dropped silently.

use crate::manifests::{self, ManifestError};
use crate::scanner::{self, patterns, FoundFiles};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Checks a raw dependency token against the package-name grammar.
///
/// A valid token is an identifier-like name (letters, digits, underscore,
/// hyphen, dot; leading letter or underscore), optionally followed by a
/// comparison operator (`==`, `>=`, `<=`, `!=`, `~=`, `<`, `>`) and a
/// version expression.
pub fn is_valid_package_name(package: &str) -> bool {
    let valid_package_re =
        Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.-]*\s*(?:(?:[=<>!~]=|[<>]).*)?$").expect("valid regex");
    valid_package_re.is_match(package)
}

/// Extracts the normalized package list for a repository.
///
/// Locates every dependency manifest under `directory`, dispatches each
/// discovered path to its format parser, then validates, deduplicates
/// (first occurrence wins) and cleans the raw strings. Requirements files
/// under a `docs` path are excluded: they describe documentation-build
/// dependencies, not runtime or test dependencies.
pub fn get_required_packages(directory: &Path) -> Result<Vec<String>, ManifestError> {
    let found = scanner::find_files(directory, patterns::DEPENDENCY_MANIFESTS);

    let mut raw_packages = Vec::new();
    for (canonical, paths) in found.iter() {
        let parser = match manifests::parser_for(canonical) {
            Some(parser) => parser,
            None => continue,
        };
        for rel_path in paths {
            if canonical == patterns::REQUIREMENTS_CANONICAL
                && rel_path.to_string_lossy().contains("docs")
            {
                debug!(path = %rel_path.display(), "skipping documentation requirements");
                continue;
            }
            raw_packages.extend(parser(&directory.join(rel_path))?);
        }
    }

    let mut seen = HashSet::new();
    let mut packages = Vec::new();
    for raw in raw_packages {
        if !is_valid_package_name(&raw) {
            debug!(token = %raw, "dropping invalid package token");
            continue;
        }
        if !seen.insert(raw.clone()) {
            continue;
        }
        let uncommented = match raw.split_once('#') {
            Some((before_comment, _)) => before_comment,
            None => raw.as_str(),
        };
        let cleaned: String = uncommented.chars().filter(|c| !c.is_whitespace()).collect();
        packages.push(cleaned);
    }

    info!(
        root = %directory.display(),
        count = packages.len(),
        "normalized package list"
    );
    Ok(packages)
}

/// Raw manifest index for callers that want filenames and paths rather
/// than parsed packages. Includes locate-only manifests (tox.ini).
pub fn get_required_packages_file(directory: &Path) -> FoundFiles {
    scanner::find_files(directory, patterns::LOCATABLE_MANIFESTS)
}
