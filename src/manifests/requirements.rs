//! requirements.txt-style parsing

use super::ManifestError;
use std::path::Path;
use tracing::debug;

/// Parses a requirements-format file into raw dependency strings.
///
/// Line-oriented: blank lines and `#` comment lines are skipped, and any
/// environment-marker suffix after the first `;` is dropped.
pub fn parse_requirements_txt(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = super::read_to_string(path)?;

    let mut packages = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let spec = match line.split_once(';') {
            Some((before_marker, _)) => before_marker,
            None => line,
        };
        packages.push(spec.to_string());
    }

    debug!(path = %path.display(), count = packages.len(), "parsed requirements file");
    Ok(packages)
}
