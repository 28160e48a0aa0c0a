//! End-to-end extraction tests over synthetic repositories
//!
//! Each test builds a small repository tree in a temp directory and runs
//! the full extraction pipeline against it.

use pysift::{
    find_files, get_instances, get_python_version_from_directory, get_repo_version,
    get_required_packages, get_required_packages_file, is_valid_package_name,
    suggest_install_commands, ManifestError,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use yare::parameterized;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn dev_requirements_alone_produce_packages() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "requirements-dev.txt", "foo==1.0\n");

    let packages = get_required_packages(repo.path()).unwrap();
    assert_eq!(packages, vec!["foo==1.0"]);
}

#[test]
fn docs_requirements_contribute_nothing() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "docs/requirements.txt", "sphinx\nsphinx-rtd-theme\n");

    let packages = get_required_packages(repo.path()).unwrap();
    assert!(packages.is_empty());
}

#[test]
fn duplicate_lines_across_files_collapse() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "requirements.txt", "bar>=2.0\n");
    write(repo.path(), "requirements-test.txt", "bar>=2.0\nextra\n");

    let packages = get_required_packages(repo.path()).unwrap();
    assert_eq!(
        packages.iter().filter(|p| p.as_str() == "bar>=2.0").count(),
        1
    );
    assert!(packages.contains(&"extra".to_string()));
}

#[test]
fn all_manifest_formats_feed_one_list() {
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        "environment.yml",
        "dependencies:\n  - numpy\n  - pip:\n    - flask==2.0\n",
    );
    write(
        repo.path(),
        "pyproject.toml",
        "[tool.poetry.dependencies]\npython = \"^3.8\"\nrequests = \"^2.28\"\n",
    );
    write(
        repo.path(),
        "setup.py",
        "setup(install_requires=[\"click>=8.0\"])\n",
    );
    write(repo.path(), "requirements.txt", "pytest\n");

    let packages = get_required_packages(repo.path()).unwrap();
    assert!(packages.contains(&"numpy".to_string()));
    assert!(packages.contains(&"flask==2.0".to_string()));
    assert!(packages.contains(&"requests>=2.28".to_string()));
    assert!(packages.contains(&"click>=8.0".to_string()));
    assert!(packages.contains(&"pytest".to_string()));
    // The interpreter pin never shows up as a package
    assert!(!packages.iter().any(|p| p.starts_with("python")));
}

#[test]
fn malformed_manifest_propagates_to_caller() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "requirements.txt", "flask\n");
    write(repo.path(), "pyproject.toml", "[tool.poetry\n");

    let result = get_required_packages(repo.path());
    assert!(matches!(result, Err(ManifestError::Toml { .. })));
}

#[parameterized(
    pinned = { "numpy==1.21.0", true },
    underscored = { "flask_sqlalchemy", true },
    leading_digit = { "1invalid", false },
    no_name = { "==1.0", false },
)]
fn package_name_grammar(token: &str, valid: bool) {
    assert_eq!(is_valid_package_name(token), valid);
}

#[test]
fn markdown_versions_select_maximum_valid() {
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        "README.md",
        "Tested on Python 3.6 and 3.9. Support for 3.13 is planned.\n",
    );

    assert_eq!(
        get_python_version_from_directory(repo.path()),
        Some("3.9".to_string())
    );
}

#[test]
fn pyproject_python_requirement_feeds_selection() {
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        "pyproject.toml",
        "[tool.poetry.dependencies]\npython = \"^3.8\"\n",
    );

    assert_eq!(
        get_python_version_from_directory(repo.path()),
        Some("3.8".to_string())
    );
}

#[test]
fn python_version_sources_combine_across_formats() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "README.md", "Requires Python 3.6 or newer.\n");
    write(
        repo.path(),
        ".travis.yml",
        "language: python\npython:\n  - \"3.7\"\n  - \"3.9\"\n",
    );
    write(
        repo.path(),
        "setup.py",
        "setup(python_requires=\">=3.8\")\n",
    );

    assert_eq!(
        get_python_version_from_directory(repo.path()),
        Some("3.9".to_string())
    );
}

#[test]
fn repo_version_default_when_absent() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "README.md", "# project\n");
    write(repo.path(), "src/main.py", "print('hi')\n");

    assert_eq!(get_repo_version(repo.path(), "unknown"), "unknown");
}

#[test]
fn repo_version_last_visited_wins() {
    // Sorted traversal processes the root setup.py before the nested
    // pyproject.toml, so the nested declaration is the survivor.
    let repo = TempDir::new().unwrap();
    write(repo.path(), "setup.py", "setup(version=\"2.3.4\")\n");
    write(
        repo.path(),
        "sub/pyproject.toml",
        "[tool.poetry]\nversion = \"9.9.9\"\n",
    );

    assert_eq!(get_repo_version(repo.path(), "unknown"), "9.9");
}

#[test]
fn repo_version_is_reduced_to_major_minor() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "VERSION", "5.11.2\n");

    assert_eq!(get_repo_version(repo.path(), "unknown"), "5.11");
}

#[test]
fn file_index_and_install_suggestions_line_up() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "requirements.in", "flask\n");
    write(repo.path(), "tox.ini", "[tox]\nenvlist = py39\n");
    write(repo.path(), "nested/setup.py", "setup()\n");

    let found = get_required_packages_file(repo.path());
    // requirements.in collapses into the requirements.txt family
    assert!(found.contains_key("requirements.txt"));
    assert!(found.contains_key("tox.ini"));
    assert_eq!(found.get("setup.py").unwrap().len(), 1);

    let commands = suggest_install_commands(&found);
    assert!(commands.contains(&"pip install -r requirements.txt"));
    assert!(commands.contains(&"pip install -e ."));
    assert!(commands.contains(&"tox"));
}

#[test]
fn find_files_is_pure_lookup() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "a/requirements.txt", "x\n");
    write(repo.path(), "b/requirements.txt", "y\n");

    let found = find_files(repo.path(), &["requirements.txt"]);
    assert_eq!(found.get("requirements.txt").unwrap().len(), 2);
}

#[test]
fn instances_round_trip_through_both_formats() {
    let dir = TempDir::new().unwrap();

    let json_path = dir.path().join("tasks.json");
    fs::write(&json_path, r#"[{"instance_id": "t1"}, {"instance_id": "t2"}]"#).unwrap();
    let from_json = get_instances(&json_path).unwrap();

    let jsonl_path = dir.path().join("tasks.jsonl");
    fs::write(
        &jsonl_path,
        "{\"instance_id\": \"t1\"}\n{\"instance_id\": \"t2\"}\n",
    )
    .unwrap();
    let from_jsonl = get_instances(&jsonl_path).unwrap();

    assert_eq!(from_json, from_jsonl);
}
