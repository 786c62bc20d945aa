use crate::file_ref::FileRef;
use std::fs;
use std::path::Path;
use tracing::trace;

/// One way of guessing a file's media type.
pub trait MimeStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this strategy is responsible for `file`.
    fn applies_to(&self, file: &FileRef) -> bool;

    /// `None` when the type cannot be determined. Never fails.
    fn resolve(&self, file: &FileRef) -> Option<String>;
}

/// Looks the extension up in the standard extension table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionStrategy;

impl MimeStrategy for ExtensionStrategy {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn applies_to(&self, file: &FileRef) -> bool {
        file.extension().is_some()
    }

    fn resolve(&self, file: &FileRef) -> Option<String> {
        let ext = file.extension()?;
        mime_guess::from_ext(ext).first_raw().map(str::to_string)
    }
}

/// Sniffs the leading bytes for a known file signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagicBytesStrategy;

impl MimeStrategy for MagicBytesStrategy {
    fn name(&self) -> &'static str {
        "magic"
    }

    fn applies_to(&self, file: &FileRef) -> bool {
        file.extension().is_none()
    }

    fn resolve(&self, file: &FileRef) -> Option<String> {
        match infer::get_from_path(file.absolute()) {
            Ok(kind) => kind.map(|k| k.mime_type().to_string()),
            Err(e) => {
                trace!("Unable to sniff '{}': {}", file.absolute().display(), e);
                None
            }
        }
    }
}

/// Ordered list of strategies. The first strategy that applies to a file
/// decides its type, even if it cannot resolve one.
pub struct MimeResolver {
    strategies: Vec<Box<dyn MimeStrategy>>,
}

impl MimeResolver {
    pub fn new(strategies: Vec<Box<dyn MimeStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn resolve(&self, file: &FileRef) -> Option<String> {
        let strategy = self.strategies.iter().find(|s| s.applies_to(file))?;
        let mime = strategy.resolve(file);
        trace!(
            "{} -> {:?} (by {})",
            file.absolute().display(),
            mime,
            strategy.name()
        );
        mime
    }
}

impl Default for MimeResolver {
    fn default() -> Self {
        Self::new(vec![Box::new(ExtensionStrategy), Box::new(MagicBytesStrategy)])
    }
}

pub trait TextClassifier: Send + Sync {
    /// Read failures count as "not text".
    fn is_text(&self, path: &Path) -> bool;
}

/// A file is text when its full contents decode as UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8TextClassifier;

impl TextClassifier for Utf8TextClassifier {
    fn is_text(&self, path: &Path) -> bool {
        fs::read_to_string(path).is_ok()
    }
}
