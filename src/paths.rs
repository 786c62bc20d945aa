use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

/// Turns a possibly relative path into the absolute form used for identity
/// and path-distance comparisons.
pub trait PathResolver: Send + Sync {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Resolves against the process working directory. Symlinks are not
/// followed and `..` segments are kept as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentDirResolver;

impl PathResolver for CurrentDirResolver {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }
}

/// Resolves relative paths against a fixed root instead of the working
/// directory. Absolute paths pass through untouched.
#[derive(Debug, Clone)]
pub struct RootedResolver {
    root: PathBuf,
}

impl RootedResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PathResolver for RootedResolver {
    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot make an empty path absolute",
            ));
        }
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.root.join(path))
        }
    }
}

/// The extension as stored on disk. A trailing dot (`"notes."`) is no
/// extension.
pub fn os_extension(path: &Path) -> Option<&OsStr> {
    path.extension().filter(|ext| !ext.is_empty())
}

/// The file name, stem and extension of a path, as lossy UTF-8. Distinct
/// non-UTF-8 names can collapse to the same string here; compare the raw
/// `OsStr` values for identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParts {
    pub name: String,
    pub stem: String,
    /// `None` for no extension, including a trailing dot (`"notes."`).
    pub extension: Option<String>,
}

pub fn extract_path_parts(path: &Path) -> PathParts {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extension = os_extension(path).map(|s| s.to_string_lossy().into_owned());

    PathParts {
        name,
        stem,
        extension,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rooted_resolver_joins_relative() {
        let resolver = RootedResolver::new("/projects/demo");
        assert_eq!(
            resolver.absolute(Path::new("assets/logo.png")).unwrap(),
            PathBuf::from("/projects/demo/assets/logo.png")
        );
        assert_eq!(
            resolver.absolute(Path::new("/etc/hosts")).unwrap(),
            PathBuf::from("/etc/hosts")
        );
    }

    #[test]
    fn test_empty_path_does_not_resolve() {
        assert!(RootedResolver::new("/").absolute(Path::new("")).is_err());
        assert!(CurrentDirResolver.absolute(Path::new("")).is_err());
    }

    #[test]
    fn test_current_dir_resolver_is_absolute() {
        let resolved = CurrentDirResolver.absolute(Path::new("a/b.txt")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("a/b.txt"));
    }

    #[test]
    fn test_extract_path_parts() {
        let parts = extract_path_parts(Path::new("test/fruits/apple/cosmic.txt"));
        assert_eq!(parts.name, "cosmic.txt");
        assert_eq!(parts.stem, "cosmic");
        assert_eq!(parts.extension.as_deref(), Some("txt"));

        let parts = extract_path_parts(Path::new("archive.tar.gz"));
        assert_eq!(parts.stem, "archive.tar");
        assert_eq!(parts.extension.as_deref(), Some("gz"));

        let parts = extract_path_parts(Path::new("fruits/apple/cosmic"));
        assert_eq!(parts.stem, "cosmic");
        assert_eq!(parts.extension, None);

        let parts = extract_path_parts(Path::new(".bashrc"));
        assert_eq!(parts.stem, ".bashrc");
        assert_eq!(parts.extension, None);

        let parts = extract_path_parts(Path::new("notes."));
        assert_eq!(parts.extension, None);
        assert_eq!(os_extension(Path::new("notes.")), None);
    }
}
