//! Media work directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Prefix for freshly created media directories.
const TEMP_PREFIX: &str = "instagram_";

/// Resolve the directory downloaded media lands in.
///
/// With an override the directory is created if missing and used as-is;
/// otherwise a fresh temporary directory is created and persisted past this
/// process. In both cases cleanup is the invoking system's obligation —
/// this component never deletes the directory.
pub fn media_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(dir.to_path_buf())
        }
        None => {
            let dir = tempfile::Builder::new().prefix(TEMP_PREFIX).tempdir()?;
            Ok(dir.keep())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_dir_override_is_created() {
        let base = tempfile::tempdir().unwrap();
        let target = base.path().join("media");

        let dir = media_dir(Some(&target)).unwrap();
        assert_eq!(dir, target);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_media_dir_fresh_is_persisted() {
        let dir = media_dir(None).unwrap();
        assert!(dir.is_dir());
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(TEMP_PREFIX));

        // Persisted directories are this test's to clean up.
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
