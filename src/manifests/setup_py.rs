//! Best-effort setup.py extraction
//!
//! setup.py is executable code, so this is deliberately regex-based: the
//! first `install_requires = [...]` literal and the `testing` list inside
//! `extras_require = {...}` are pattern-matched out of the raw text.

use super::ManifestError;
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Parses a setup.py script into raw dependency strings.
pub fn parse_setup_py(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = super::read_to_string(path)?;
    let mut packages = Vec::new();

    let install_re = Regex::new(r"(?s)install_requires\s*=\s*\[(.*?)\]").expect("valid regex");
    if let Some(cap) = install_re.captures(&content) {
        packages.extend(split_requirement_list(&cap[1]));
    }

    let extras_re =
        Regex::new(r#"(?s)extras_require\s*=\s*\{.*?["']testing["']\s*:\s*\[(.*?)\]"#)
            .expect("valid regex");
    if let Some(cap) = extras_re.captures(&content) {
        packages.extend(split_requirement_list(&cap[1]));
    }

    debug!(path = %path.display(), count = packages.len(), "parsed setup script");
    Ok(packages)
}

/// Splits a bracketed requirement list on commas, trimming whitespace and
/// surrounding quotes per entry
fn split_requirement_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|req| req.trim().trim_matches('"').trim_matches('\'').to_string())
        .collect()
}
