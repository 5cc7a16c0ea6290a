//! Literal placeholder substitution in project files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::DeployError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchOutcome {
    /// File rewritten; `replacements` may be zero if the placeholder was gone.
    Patched { replacements: usize },
    /// File does not exist; nothing was written.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePatch {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
}

/// Replace every occurrence of `placeholder` in `path` with `replacement`.
pub fn patch_placeholder(
    path: &Path,
    placeholder: &str,
    replacement: &str,
) -> Result<PatchOutcome, DeployError> {
    let patch_err = |source| DeployError::Patch {
        path: path.to_path_buf(),
        source,
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(PatchOutcome::Missing),
        Err(error) => return Err(patch_err(error)),
    };

    let replacements = content.matches(placeholder).count();
    fs::write(path, content.replace(placeholder, replacement)).map_err(patch_err)?;
    Ok(PatchOutcome::Patched { replacements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PLACEHOLDER: &str = "Agbero1111111111111111111111111111111111111";

    #[test]
    fn replaces_every_occurrence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Anchor.toml");
        fs::write(
            &path,
            format!("[programs.devnet]\nagbero = \"{PLACEHOLDER}\"\n# {PLACEHOLDER}\n"),
        )
        .unwrap();

        let outcome = patch_placeholder(&path, PLACEHOLDER, "RealId999").unwrap();
        assert_eq!(outcome, PatchOutcome::Patched { replacements: 2 });
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "[programs.devnet]\nagbero = \"RealId999\"\n# RealId999\n"
        );
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = patch_placeholder(&dir.path().join("nope.rs"), PLACEHOLDER, "X").unwrap();
        assert_eq!(outcome, PatchOutcome::Missing);
        assert!(!dir.path().join("nope.rs").exists());
    }

    #[test]
    fn file_without_placeholder_is_left_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lib.rs");
        fs::write(&path, "declare_id!(\"Other\");\n").unwrap();

        let outcome = patch_placeholder(&path, PLACEHOLDER, "X").unwrap();
        assert_eq!(outcome, PatchOutcome::Patched { replacements: 0 });
        assert_eq!(fs::read_to_string(&path).unwrap(), "declare_id!(\"Other\");\n");
    }

    #[test]
    fn directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = patch_placeholder(dir.path(), PLACEHOLDER, "X").unwrap_err();
        assert!(matches!(err, DeployError::Patch { .. }));
    }
}
