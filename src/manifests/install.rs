//! Install-command suggestions per manifest type

use crate::scanner::FoundFiles;

/// Manifest filename paired with the command that installs from it
pub const INSTALL_COMMANDS: &[(&str, &str)] = &[
    ("requirements.txt", "pip install -r requirements.txt"),
    ("environment.yml", "conda env create -f environment.yml"),
    ("setup.py", "pip install -e ."),
    ("pyproject.toml", "poetry install"),
    ("Pipfile", "pipenv install"),
    ("tox.ini", "tox"),
    (
        "conda-requirements.txt",
        "conda install --file conda-requirements.txt",
    ),
    ("requirements.in", "pip-compile && pip-sync"),
];

/// Install command for a canonical manifest filename
pub fn install_command(canonical: &str) -> Option<&'static str> {
    INSTALL_COMMANDS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, command)| *command)
}

/// Install commands for every manifest present in the index, in table order.
///
/// Keys are canonical, so the whole `requirements*` family maps to the
/// single `pip install -r requirements.txt` suggestion.
pub fn suggest_install_commands(found: &FoundFiles) -> Vec<&'static str> {
    INSTALL_COMMANDS
        .iter()
        .filter(|(name, _)| found.contains_key(name))
        .map(|(_, command)| *command)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::{self, patterns};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_known_manifests_have_commands() {
        assert_eq!(
            install_command("requirements.txt"),
            Some("pip install -r requirements.txt")
        );
        assert_eq!(install_command("pyproject.toml"), Some("poetry install"));
        assert_eq!(install_command("tox.ini"), Some("tox"));
    }

    #[test]
    fn test_unknown_manifest_has_no_command() {
        assert_eq!(install_command("package.json"), None);
    }

    #[test]
    fn test_suggestions_follow_discovered_manifests() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements-dev.txt"), "pytest\n").unwrap();
        fs::write(dir.path().join("tox.ini"), "[tox]\n").unwrap();

        let found = scanner::find_files(dir.path(), patterns::LOCATABLE_MANIFESTS);
        let commands = suggest_install_commands(&found);

        assert_eq!(commands, vec!["pip install -r requirements.txt", "tox"]);
    }

    #[test]
    fn test_empty_index_suggests_nothing() {
        let found = FoundFiles::default();
        assert!(suggest_install_commands(&found).is_empty());
    }
}
