use crate::classify::{MimeResolver, TextClassifier};
use crate::file_ref::FileRef;
use std::fmt;

/// Outcome of comparing what kind of data two files hold, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMatch {
    SameExtension,
    SameMime,
    BothText,
    Unrelated,
}

impl TypeMatch {
    pub fn score(self) -> f64 {
        match self {
            TypeMatch::SameExtension => 1.0,
            TypeMatch::SameMime => 0.9,
            TypeMatch::BothText => 0.5,
            TypeMatch::Unrelated => 0.0,
        }
    }
}

impl fmt::Display for TypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TypeMatch::SameExtension => "same extension",
            TypeMatch::SameMime => "same media type",
            TypeMatch::BothText => "both text",
            TypeMatch::Unrelated => "unrelated",
        };
        f.write_str(label)
    }
}

/// Checks run in order and stop at the first that holds, so a cheap
/// extension comparison never pays for a file read.
pub fn type_similarity(
    a: &FileRef,
    b: &FileRef,
    mime: &MimeResolver,
    text: &dyn TextClassifier,
) -> TypeMatch {
    if a.same_extension(b) {
        return TypeMatch::SameExtension;
    }

    // an unresolvable type equals nothing, itself included
    if let (Some(a_mime), Some(b_mime)) = (mime.resolve(a), mime.resolve(b)) {
        if a_mime == b_mime {
            return TypeMatch::SameMime;
        }
    }

    if text.is_text(a.absolute()) && text.is_text(b.absolute()) {
        return TypeMatch::BothText;
    }

    TypeMatch::Unrelated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Utf8TextClassifier;
    use crate::paths::RootedResolver;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn file(path: impl Into<PathBuf>) -> FileRef {
        FileRef::resolve(path.into(), &RootedResolver::new("/")).unwrap()
    }

    fn compare(a: &FileRef, b: &FileRef) -> TypeMatch {
        type_similarity(a, b, &MimeResolver::default(), &Utf8TextClassifier)
    }

    /// Reports every path as text without touching the disk.
    struct AlwaysText;
    impl TextClassifier for AlwaysText {
        fn is_text(&self, _path: &Path) -> bool {
            true
        }
    }

    #[test]
    fn test_same_extension_ignores_content() {
        // neither file exists
        assert_eq!(
            compare(&file("/x/cosmic.png"), &file("/y/other.png")),
            TypeMatch::SameExtension
        );
        assert_eq!(
            compare(&file("/x/README"), &file("/y/LICENSE")),
            TypeMatch::SameExtension
        );
    }

    #[test]
    fn test_extension_case_sensitive_but_mime_equal() {
        assert_eq!(
            compare(&file("/x/cosmic.jpg"), &file("/x/cosmic.JPEG")),
            TypeMatch::SameMime
        );
        assert_eq!(
            compare(&file("/x/notes.txt"), &file("/x/notes.TXT")),
            TypeMatch::SameMime
        );
    }

    #[test]
    fn test_different_binary_types_unrelated() {
        assert_eq!(
            compare(&file("/x/cosmic.jpg"), &file("/x/cosmic.png")),
            TypeMatch::Unrelated
        );
    }

    #[test]
    fn test_unresolved_types_are_not_equal() {
        let a = file("/x/one.zzqxv");
        let b = file("/x/two.qqzzy");
        assert_eq!(
            type_similarity(&a, &b, &MimeResolver::default(), &Utf8TextClassifier),
            TypeMatch::Unrelated
        );
        assert_eq!(
            type_similarity(&a, &b, &MimeResolver::default(), &AlwaysText),
            TypeMatch::BothText
        );
    }

    #[test]
    fn test_text_files_of_different_types() {
        let tmp = tempdir().unwrap();
        let txt = tmp.path().join("cosmic.txt");
        let json = tmp.path().join("cosmic.json");
        let bare = tmp.path().join("cosmic");
        fs::write(&txt, "crisp and sweet").unwrap();
        fs::write(&json, "{\"variety\": \"cosmic\"}").unwrap();
        fs::write(&bare, "no extension here").unwrap();

        assert_eq!(compare(&file(&txt), &file(&json)), TypeMatch::BothText);
        assert_eq!(compare(&file(&txt), &file(&bare)), TypeMatch::BothText);
    }

    #[test]
    fn test_text_against_binary() {
        let tmp = tempdir().unwrap();
        let txt = tmp.path().join("cosmic.txt");
        let jpg = tmp.path().join("cosmic.jpg");
        fs::write(&txt, "crisp and sweet").unwrap();
        fs::write(&jpg, [0xFFu8, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x80, 0x81]).unwrap();

        assert_eq!(compare(&file(&txt), &file(&jpg)), TypeMatch::Unrelated);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_extensions_are_not_the_same() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let a = file(PathBuf::from(OsStr::from_bytes(b"/x/cosmic.\xff")));
        let b = file(PathBuf::from(OsStr::from_bytes(b"/y/cosmic.\xfe")));
        assert_eq!(compare(&a, &b), TypeMatch::Unrelated);
        assert_eq!(compare(&a, &a.clone()), TypeMatch::SameExtension);
    }

    #[test]
    fn test_scores() {
        assert_eq!(TypeMatch::SameExtension.score(), 1.0);
        assert_eq!(TypeMatch::SameMime.score(), 0.9);
        assert_eq!(TypeMatch::BothText.score(), 0.5);
        assert_eq!(TypeMatch::Unrelated.score(), 0.0);
    }
}
