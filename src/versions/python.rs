//! Python interpreter version inference
//!
//! Gathers version-like tokens from markdown documentation, setup.py,
//! .travis.yml and pyproject.toml, filters them against the plausible
//! interpreter range and keeps the maximum.

use regex::Regex;
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Inclusive (major, minor) range a candidate must fall in to count as a
/// plausible interpreter version
const MIN_SUPPORTED: (u32, u32) = (3, 5);
const MAX_SUPPORTED: (u32, u32) = (3, 12);

/// Infers the Python version a repository targets.
///
/// Candidates are gathered from every `.md` file in the tree, then a root
/// `setup.py` (`python_requires` and trove classifiers), a root
/// `.travis.yml` (`python` key) and a root `pyproject.toml`
/// (`tool.poetry.dependencies.python`). The maximum valid candidate wins;
/// `None` when nothing validates.
pub fn get_python_version_from_directory(directory: &Path) -> Option<String> {
    let mut candidates = Vec::new();

    for md_path in markdown_files(directory) {
        if let Ok(content) = fs::read_to_string(&md_path) {
            candidates.extend(version_tokens(&content));
        }
    }

    let setup_py = directory.join("setup.py");
    if setup_py.exists() {
        candidates.extend(versions_from_setup_py(&setup_py));
    }

    let travis_yml = directory.join(".travis.yml");
    if travis_yml.exists() {
        candidates.extend(versions_from_travis_yml(&travis_yml));
    }

    let pyproject_toml = directory.join("pyproject.toml");
    if pyproject_toml.exists() {
        candidates.extend(versions_from_pyproject_toml(&pyproject_toml));
    }

    debug!(
        root = %directory.display(),
        candidates = candidates.len(),
        "collected python version candidates"
    );
    max_python_version(&candidates)
}

/// Selects the maximum valid candidate, rendered as `major.minor` or
/// `major.minor.patch`.
///
/// Candidates compare exactly as parsed: a missing patch component compares
/// as the shorter sequence, so `3.9` orders below `3.9.0`.
pub fn max_python_version(candidates: &[String]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|candidate| parse_valid_version(candidate))
        .max()
        .map(|components| {
            components
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(".")
        })
}

/// Parses a candidate into numeric components, rejecting anything that is
/// not 2 or 3 integers within the supported interpreter range
fn parse_valid_version(candidate: &str) -> Option<Vec<u32>> {
    let parts: Vec<&str> = candidate.split('.').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let mut components = Vec::with_capacity(parts.len());
    for part in &parts {
        components.push(part.parse::<u32>().ok()?);
    }
    let major_minor = (components[0], components[1]);
    if major_minor < MIN_SUPPORTED || major_minor > MAX_SUPPORTED {
        return None;
    }
    Some(components)
}

fn markdown_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map_or(false, |extension| extension == "md")
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Every `\d+.\d+(.\d+)?` token in the text
fn version_tokens(text: &str) -> Vec<String> {
    let version_re = Regex::new(r"\b(\d+\.\d+(\.\d+)?)\b").expect("valid regex");
    version_re
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

fn versions_from_setup_py(path: &Path) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };

    let mut versions = Vec::new();
    let requires_re =
        Regex::new(r#"python_requires\s*=\s*['"](.+?)['"]"#).expect("valid regex");
    if let Some(cap) = requires_re.captures(&content) {
        versions.extend(version_tokens(&cap[1]));
    }

    // Trove classifiers carry bare major.minor pairs
    let classifier_re =
        Regex::new(r"Programming Language :: Python :: (\d+\.\d+)").expect("valid regex");
    versions.extend(
        classifier_re
            .captures_iter(&content)
            .map(|cap| cap[1].to_string()),
    );

    versions
}

fn versions_from_travis_yml(path: &Path) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };
    let doc: YamlValue = match serde_yaml::from_str(&content) {
        Ok(doc) => doc,
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping unparseable CI config");
            return Vec::new();
        }
    };

    match doc.get("python") {
        Some(YamlValue::Sequence(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                YamlValue::String(version) => Some(version.clone()),
                YamlValue::Number(version) => Some(version.to_string()),
                _ => None,
            })
            .collect(),
        Some(YamlValue::String(version)) => vec![version.clone()],
        _ => Vec::new(),
    }
}

fn versions_from_pyproject_toml(path: &Path) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };
    let doc: toml::Value = match toml::from_str(&content) {
        Ok(doc) => doc,
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping unparseable project manifest");
            return Vec::new();
        }
    };

    doc.get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(|poetry| poetry.get("dependencies"))
        .and_then(|dependencies| dependencies.get("python"))
        .and_then(toml::Value::as_str)
        .map(version_tokens)
        .unwrap_or_default()
}
