//! Self-declared repository version inference
//!
//! Walks the whole tree and folds every recognized version-bearing file
//! into a single running candidate: the last successful extraction in
//! traversal order wins, with no precedence among file types. Per-file
//! parse failures contribute nothing.

use regex::Regex;
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Python source files inspected for a `__version__`/`VERSION` assignment
const VERSION_SOURCE_FILES: &[&str] = &[
    "version.py",
    "__init__.py",
    "__version__.py",
    "__pkginfo__.py",
];

/// Extracts the last version candidate found anywhere in the tree.
///
/// Recognized sources: a `.travis.yml` `version` key, the trimmed text of a
/// `version`/`.version` file (case-insensitive name), a
/// `__version__`/`VERSION` assignment in well-known Python source files,
/// `tool.poetry.version` or `project.version` in pyproject.toml, and a
/// `version="..."` keyword in setup.py.
pub fn get_repo_version_candidate(repo_path: &Path) -> Option<String> {
    let mut candidate = None;

    for entry in WalkDir::new(repo_path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let filename = match entry.file_name().to_str() {
            Some(filename) => filename,
            None => continue,
        };
        let path = entry.path();

        let extracted = if filename == ".travis.yml" {
            version_from_travis_yml(path)
        } else if filename.eq_ignore_ascii_case("version") || filename.eq_ignore_ascii_case(".version")
        {
            fs::read_to_string(path).ok().map(|text| text.trim().to_string())
        } else if VERSION_SOURCE_FILES.contains(&filename) {
            version_from_python_source(path)
        } else if filename == "pyproject.toml" {
            version_from_pyproject_toml(path)
        } else if filename == "setup.py" {
            version_from_setup_py(path)
        } else {
            None
        };

        if let Some(version) = extracted {
            debug!(path = %path.display(), version = %version, "repository version candidate");
            candidate = Some(version);
        }
    }

    candidate
}

/// Infers the repository version, reduced to its first `major.minor`
/// substring; returns the caller's default sentinel when nothing usable is
/// found anywhere in the tree.
pub fn get_repo_version(repo_path: &Path, default: &str) -> String {
    let reduced = get_repo_version_candidate(repo_path).and_then(|candidate| {
        let version_re = Regex::new(r"\b(\d+\.\d+)\b").expect("valid regex");
        version_re
            .captures(&candidate)
            .map(|cap| cap[1].to_string())
    });

    match reduced {
        Some(version) => version,
        None => {
            debug!(root = %repo_path.display(), default, "no repository version found");
            default.to_string()
        }
    }
}

/// Lists every file in the tree that may carry a repository version:
/// well-known Python version modules, any other `.py` file whose text
/// mentions `__version__`, and `*.version` files.
pub fn find_version_files(directory: &Path) -> Vec<PathBuf> {
    let mut version_files = Vec::new();

    for entry in WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let filename = match entry.file_name().to_str() {
            Some(filename) => filename,
            None => continue,
        };
        let path = entry.path();

        if filename.ends_with(".py") {
            if matches!(filename, "version.py" | "__init__.py" | "__pkginfo__.py") {
                version_files.push(path.to_path_buf());
            } else if let Ok(content) = fs::read_to_string(path) {
                if content.lines().any(|line| line.contains("__version__")) {
                    version_files.push(path.to_path_buf());
                }
            }
        } else if filename.ends_with(".version") {
            version_files.push(path.to_path_buf());
        }
    }

    version_files
}

fn version_from_travis_yml(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let doc: YamlValue = serde_yaml::from_str(&content).ok()?;
    match doc.get("version")? {
        YamlValue::String(version) => Some(version.clone()),
        YamlValue::Number(version) => Some(version.to_string()),
        _ => None,
    }
}

fn version_from_python_source(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let assignment_re =
        Regex::new(r#"(__version__|VERSION)\s*=\s*['"]?([\w.]+)['"]?"#).expect("valid regex");
    assignment_re
        .captures(&content)
        .map(|cap| cap[2].to_string())
}

fn version_from_pyproject_toml(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let doc: toml::Value = toml::from_str(&content).ok()?;

    doc.get("tool")
        .and_then(|tool| tool.get("poetry"))
        .and_then(|poetry| poetry.get("version"))
        .and_then(toml::Value::as_str)
        .or_else(|| {
            doc.get("project")
                .and_then(|project| project.get("version"))
                .and_then(toml::Value::as_str)
        })
        .map(str::to_string)
}

fn version_from_setup_py(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let version_re = Regex::new(r#"version\s*=\s*['"]([\d.]+)['"]"#).expect("valid regex");
    version_re.captures(&content).map(|cap| cap[1].to_string())
}
