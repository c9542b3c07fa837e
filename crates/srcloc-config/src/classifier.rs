use crate::{Result, SourceConfig};
use glob::Pattern;
use srcloc::FileKey;
use std::path::Path;

/// Maps file paths to [`FileKey`]s according to a [`SourceConfig`].
///
/// Checks run in a fixed order: lib patterns, declaration suffixes, then
/// resource, JSON and source extensions. A path that matches none of them
/// is not classified.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: SourceConfig,
    libs: Vec<Pattern>,
}

impl Classifier {
    /// Build a classifier, compiling the lib patterns.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let libs = config
            .libs
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { config, libs })
    }

    #[must_use]
    pub const fn config(&self) -> &SourceConfig {
        &self.config
    }

    #[must_use]
    pub fn classify(&self, path: &Path) -> Option<FileKey> {
        let path_str = path.to_string_lossy().into_owned();

        if self.libs.iter().any(|pattern| pattern.matches_path(path)) {
            tracing::debug!(path = %path_str, "matched lib pattern");
            return Some(FileKey::LibFile(path_str));
        }

        if self
            .config
            .declaration_suffixes
            .iter()
            .any(|suffix| path_str.ends_with(suffix.as_str()))
        {
            tracing::debug!(path = %path_str, "matched declaration suffix");
            return Some(FileKey::LibFile(path_str));
        }

        let extension = path.extension().and_then(|ext| ext.to_str())?;
        let has = |extensions: &[String]| extensions.iter().any(|e| e == extension);

        let key = if has(&self.config.resource_extensions) {
            FileKey::ResourceFile(path_str)
        } else if has(&self.config.json_extensions) {
            FileKey::JsonFile(path_str)
        } else if has(&self.config.source_extensions) {
            FileKey::SourceFile(path_str)
        } else {
            tracing::debug!(path = %path.display(), "unclassified extension");
            return None;
        };
        Some(key)
    }

    /// The file a declaration file describes: strip the first declaration
    /// suffix the path carries and classify what is left.
    #[must_use]
    pub fn implementation_of(&self, key: &FileKey) -> Option<FileKey> {
        for suffix in &self.config.declaration_suffixes {
            match key.strip_suffix(suffix) {
                Ok(stripped) => return self.classify(Path::new(stripped.path()?)),
                Err(err) => tracing::trace!(%err, "declaration suffix does not apply"),
            }
        }
        None
    }
}
