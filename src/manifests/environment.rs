//! conda environment.yml parsing

use super::ManifestError;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Parses a conda environment spec into raw dependency strings.
///
/// String entries under `dependencies` are kept verbatim; mapping entries
/// holding a `pip` key contribute each string element of that key's list.
pub fn parse_environment_yml(path: &Path) -> Result<Vec<String>, ManifestError> {
    let content = super::read_to_string(path)?;
    let doc: Value = serde_yaml::from_str(&content).map_err(|source| ManifestError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let mut packages = Vec::new();
    if let Some(dependencies) = doc.get("dependencies").and_then(Value::as_sequence) {
        for dep in dependencies {
            match dep {
                Value::String(spec) => packages.push(spec.clone()),
                Value::Mapping(_) => {
                    if let Some(pip) = dep.get("pip").and_then(Value::as_sequence) {
                        packages.extend(
                            pip.iter()
                                .filter_map(Value::as_str)
                                .map(str::to_string),
                        );
                    }
                }
                _ => {}
            }
        }
    }

    debug!(path = %path.display(), count = packages.len(), "parsed environment spec");
    Ok(packages)
}
