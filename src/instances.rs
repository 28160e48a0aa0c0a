//! Task-record ingestion
//!
//! The surrounding harness feeds task instances either as a single JSON
//! document holding a list of records, or as line-delimited JSON (one
//! record per line). Both load into an in-memory ordered sequence of
//! records.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A single task record: string keys mapped to arbitrary JSON values
pub type TaskInstance = Map<String, Value>;

/// Loads task instances from a `.json` list or a `.jsonl`/`.jsonl.all`
/// line-delimited file.
pub fn get_instances(instance_path: &Path) -> Result<Vec<TaskInstance>> {
    let content = fs::read_to_string(instance_path).with_context(|| {
        format!(
            "failed to read task instances from {}",
            instance_path.display()
        )
    })?;

    let name = instance_path.to_string_lossy();
    let instances = if name.ends_with(".jsonl") || name.ends_with(".jsonl.all") {
        content
            .lines()
            .enumerate()
            .map(|(index, line)| {
                serde_json::from_str(line).with_context(|| {
                    format!(
                        "invalid JSON record on line {} of {}",
                        index + 1,
                        instance_path.display()
                    )
                })
            })
            .collect::<Result<Vec<TaskInstance>>>()?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON task list in {}", instance_path.display()))?
    };

    debug!(
        path = %instance_path.display(),
        count = instances.len(),
        "loaded task instances"
    );
    Ok(instances)
}
