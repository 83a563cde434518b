#![deny(missing_docs)]

//! # Directory Walking
//!
//! Recursive, file-name sorted enumeration of a shader tree.

use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extension used when none is configured.
pub const DEFAULT_EXTENSION: &str = ".frag";

/// Enumerates the files below a root directory and filters shaders by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderWalker {
    root: PathBuf,
    extension: String,
}

impl ShaderWalker {
    /// Creates a walker for `root` matching file names ending in `extension`.
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// The directory being walked.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Exact, case-sensitive suffix match on the raw bytes of the file name.
    ///
    /// Names that are not valid UTF-8 still match on their suffix.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| {
            name.as_encoded_bytes()
                .ends_with(self.extension.as_bytes())
        })
    }

    /// Every regular file below the root, walked afresh on each call.
    ///
    /// A root that is missing or not a directory yields nothing. Symlinks are
    /// yielded unless they point to a directory, so a dangling link surfaces as a
    /// read error when it is patched.
    pub fn files(&self) -> impl Iterator<Item = AppResult<PathBuf>> {
        let walker = self
            .root
            .is_dir()
            .then(|| WalkDir::new(&self.root).min_depth(1).sort_by_file_name());

        walker.into_iter().flatten().filter_map(|entry| match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_file()
                    || (entry.path_is_symlink() && !entry.path().is_dir());
                is_file.then(|| Ok(entry.into_path()))
            }
            Err(e) => Some(Err(AppError::from(e))),
        })
    }

    /// Only the files whose names match the extension.
    pub fn shaders(&self) -> impl Iterator<Item = AppResult<PathBuf>> + '_ {
        self.files().filter(|item| match item {
            Ok(path) => self.matches(path),
            Err(_) => true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_matches_exact_suffix() {
        let walker = ShaderWalker::new(".", DEFAULT_EXTENSION);
        assert!(walker.matches(Path::new("a/x.frag")));
        assert!(!walker.matches(Path::new("a/x.vert")));
        assert!(!walker.matches(Path::new("a/x.frag.bak")));
        assert!(!walker.matches(Path::new("a/x.FRAG")));
    }

    #[test]
    fn test_walks_recursively_in_name_order() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.frag"), "").unwrap();
        fs::write(dir.path().join("a.vert"), "").unwrap();
        fs::write(dir.path().join("nested/c.frag"), "").unwrap();
        fs::write(dir.path().join("nested/deeper/d.frag.bak"), "").unwrap();

        let walker = ShaderWalker::new(dir.path(), DEFAULT_EXTENSION);

        let files: Vec<PathBuf> = walker
            .files()
            .map(|p| p.unwrap().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            files,
            vec![
                PathBuf::from("a.vert"),
                PathBuf::from("b.frag"),
                PathBuf::from("nested/c.frag"),
                PathBuf::from("nested/deeper/d.frag.bak"),
            ]
        );

        let shaders: Vec<PathBuf> = walker
            .shaders()
            .map(|p| p.unwrap().strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            shaders,
            vec![PathBuf::from("b.frag"), PathBuf::from("nested/c.frag")]
        );
    }

    #[test]
    fn test_walk_is_restartable() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.frag"), "").unwrap();
        let walker = ShaderWalker::new(dir.path(), DEFAULT_EXTENSION);
        assert_eq!(walker.shaders().count(), 1);
        fs::write(dir.path().join("two.frag"), "").unwrap();
        assert_eq!(walker.shaders().count(), 2);
    }

    #[test]
    fn test_missing_or_file_root_yields_nothing() {
        let dir = tempdir().unwrap();
        let missing = ShaderWalker::new(dir.path().join("nope"), DEFAULT_EXTENSION);
        assert_eq!(missing.files().count(), 0);

        let file = dir.path().join("x.frag");
        fs::write(&file, "").unwrap();
        let not_dir = ShaderWalker::new(&file, DEFAULT_EXTENSION);
        assert_eq!(not_dir.files().count(), 0);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_matches_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"\xffwave.frag"));
        fs::write(&path, "uniform float x;\nPI;\n").unwrap();

        let walker = ShaderWalker::new(dir.path(), DEFAULT_EXTENSION);
        assert!(walker.matches(&path));
        let shaders: Vec<PathBuf> = walker.shaders().map(|p| p.unwrap()).collect();
        assert_eq!(shaders, vec![path]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_visited() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("gone.frag");
        std::os::unix::fs::symlink(dir.path().join("missing.frag"), &link).unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("sub.frag")).unwrap();

        let walker = ShaderWalker::new(dir.path(), DEFAULT_EXTENSION);
        let shaders: Vec<PathBuf> = walker.shaders().map(|p| p.unwrap()).collect();
        assert_eq!(shaders, vec![link]);
    }
}
