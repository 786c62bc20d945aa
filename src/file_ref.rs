use crate::error::{Error, Result};
use crate::paths::{extract_path_parts, os_extension, CurrentDirResolver, PathResolver};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A reference to a file by location. Content hash and type are derived on
/// demand by the collaborators, never stored here.
///
/// Equality and hashing consider the absolute path only: two references to
/// byte-identical files in different places are different references.
#[derive(Debug, Clone)]
pub struct FileRef {
    path: PathBuf,
    absolute: PathBuf,
    name: String,
    stem: String,
    extension: Option<String>,
}

impl FileRef {
    /// Resolve `path` against the current working directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::resolve(path, &CurrentDirResolver)
    }

    pub fn resolve(path: impl AsRef<Path>, resolver: &dyn PathResolver) -> Result<Self> {
        let path = path.as_ref();
        let absolute = resolver.absolute(path).map_err(|source| Error::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        let parts = extract_path_parts(&absolute);

        Ok(Self {
            path: path.to_path_buf(),
            absolute,
            name: parts.name,
            stem: parts.stem,
            extension: parts.extension,
        })
    }

    /// The path exactly as supplied by the caller.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// File name including the extension, lossily decoded for display and
    /// scoring. Use [`FileRef::same_name`] for identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Byte-exact file name comparison, extension included.
    pub fn same_name(&self, other: &FileRef) -> bool {
        self.absolute.file_name() == other.absolute.file_name()
    }

    /// Byte-exact extension comparison. Two files without one are equal.
    pub fn same_extension(&self, other: &FileRef) -> bool {
        os_extension(&self.absolute) == os_extension(&other.absolute)
    }
}

impl PartialEq for FileRef {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for FileRef {}

impl Hash for FileRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
    }
}

/// A file whose current location is unknown, optionally carrying the content
/// hash recorded before it went missing.
#[derive(Debug, Clone)]
pub struct MissingFile {
    file: FileRef,
    recorded_hash: Option<String>,
}

impl MissingFile {
    pub fn new(file: FileRef) -> Self {
        Self {
            file,
            recorded_hash: None,
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.recorded_hash = Some(hash.into());
        self
    }

    pub fn file(&self) -> &FileRef {
        &self.file
    }

    pub fn recorded_hash(&self) -> Option<&str> {
        self.recorded_hash.as_deref()
    }
}

impl From<FileRef> for MissingFile {
    fn from(file: FileRef) -> Self {
        Self::new(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::RootedResolver;

    #[test]
    fn test_identity_is_absolute_path() {
        let resolver = RootedResolver::new("/work");
        let relative = FileRef::resolve("docs/readme.md", &resolver).unwrap();
        let absolute = FileRef::resolve("/work/docs/readme.md", &resolver).unwrap();
        let elsewhere = FileRef::resolve("/other/docs/readme.md", &resolver).unwrap();

        assert_eq!(relative, absolute);
        assert_ne!(relative, elsewhere);
        assert_eq!(relative.path(), Path::new("docs/readme.md"));
        assert_eq!(relative.absolute(), Path::new("/work/docs/readme.md"));
    }

    #[test]
    fn test_name_parts() {
        let file = FileRef::resolve("/a/b/cosmic.txt", &RootedResolver::new("/")).unwrap();
        assert_eq!(file.name(), "cosmic.txt");
        assert_eq!(file.stem(), "cosmic");
        assert_eq!(file.extension(), Some("txt"));
    }

    #[test]
    fn test_same_name_and_extension() {
        let resolver = RootedResolver::new("/");
        let a = FileRef::resolve("/a/cosmic.txt", &resolver).unwrap();
        let b = FileRef::resolve("/b/cosmic.txt", &resolver).unwrap();
        let c = FileRef::resolve("/a/cosmic.TXT", &resolver).unwrap();
        let bare = FileRef::resolve("/a/README", &resolver).unwrap();
        let dotted = FileRef::resolve("/b/LICENSE.", &resolver).unwrap();

        assert!(a.same_name(&b));
        assert!(!a.same_name(&c));
        assert!(a.same_extension(&b));
        assert!(!a.same_extension(&c));
        assert!(bare.same_extension(&dotted));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_stay_distinct() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let resolver = RootedResolver::new("/");
        let ff = FileRef::resolve(OsStr::from_bytes(b"/a/\xff.txt"), &resolver).unwrap();
        let fe = FileRef::resolve(OsStr::from_bytes(b"/b/\xfe.txt"), &resolver).unwrap();
        let ext_ff = FileRef::resolve(OsStr::from_bytes(b"/a/x.\xff"), &resolver).unwrap();
        let ext_fe = FileRef::resolve(OsStr::from_bytes(b"/a/x.\xfe"), &resolver).unwrap();

        // the lossy forms collide
        assert_eq!(ff.name(), fe.name());
        assert_eq!(ext_ff.extension(), ext_fe.extension());

        assert!(!ff.same_name(&fe));
        assert!(ff.same_extension(&fe));
        assert!(!ext_ff.same_extension(&ext_fe));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let err = FileRef::resolve("", &RootedResolver::new("/")).unwrap_err();
        assert!(matches!(err, Error::Resolve { .. }));
    }

    #[test]
    fn test_missing_file_hash() {
        let file = FileRef::resolve("/a/cosmic.txt", &RootedResolver::new("/")).unwrap();
        let missing = MissingFile::new(file.clone());
        assert_eq!(missing.recorded_hash(), None);

        let missing = missing.with_hash("abc123");
        assert_eq!(missing.recorded_hash(), Some("abc123"));
        assert_eq!(missing.file(), &file);
    }
}
