//! poetry-style pyproject.toml parsing

use super::ManifestError;
use std::path::Path;
use toml::Value;
use tracing::debug;

const DEPENDENCY_TABLES: &[&str] = &["dependencies", "dev-dependencies"];

/// Parses a poetry pyproject.toml into raw dependency strings.
///
/// Entries from `tool.poetry.dependencies` and
/// `tool.poetry.dev-dependencies` emit `name==version` when a version is
/// declared (plain string or a table with a `version` field), otherwise the
/// bare name. The interpreter pin (`python`) is dropped, and the `==^`
/// caret artifact is approximated as `>=`.
pub fn parse_pyproject_toml(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = super::read_to_string(path)?;
    let doc: Value = toml::from_str(&content).map_err(|source| ManifestError::Toml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut packages = Vec::new();
    for table_key in DEPENDENCY_TABLES.iter().copied() {
        let table = doc
            .get("tool")
            .and_then(|tool| tool.get("poetry"))
            .and_then(|poetry| poetry.get(table_key))
            .and_then(Value::as_table);

        if let Some(dependencies) = table {
            for (name, spec) in dependencies {
                if name == "python" {
                    continue;
                }
                let entry = match spec {
                    Value::String(version) => format!("{name}=={version}"),
                    Value::Table(fields) => match fields.get("version").and_then(Value::as_str) {
                        Some(version) => format!("{name}=={version}"),
                        None => name.clone(),
                    },
                    _ => name.clone(),
                };
                packages.push(entry.replace("==^", ">="));
            }
        }
    }

    debug!(path = %path.display(), count = packages.len(), "parsed project manifest");
    Ok(packages)
}
