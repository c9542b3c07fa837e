use crate::{LocError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Label rendered for [`FileKey::Builtins`], which has no path.
pub const BUILTINS_LABEL: &str = "(global)";

/// Which kind of source a location belongs to.
///
/// Keys order by a fixed rank (builtins, then libraries, then ordinary and
/// JSON sources, then resources) and then by path. `SourceFile` and
/// `JsonFile` share a rank, so a `SourceFile` and a `JsonFile` with the same
/// path are the same key: equality and hashing follow the order.
#[derive(Debug, Clone)]
pub enum FileKey {
    /// Library or declaration file
    LibFile(String),
    /// Ordinary user source
    SourceFile(String),
    /// JSON file treated as source
    JsonFile(String),
    /// Asset that is referenced but never parsed
    ResourceFile(String),
    /// Synthetic, pathless home of language builtins
    Builtins,
}

impl FileKey {
    const fn rank(&self) -> u8 {
        match self {
            Self::Builtins => 1,
            Self::LibFile(_) => 2,
            Self::SourceFile(_) | Self::JsonFile(_) => 3,
            Self::ResourceFile(_) => 4,
        }
    }

    /// The underlying path, if this variant has one.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::LibFile(path)
            | Self::SourceFile(path)
            | Self::JsonFile(path)
            | Self::ResourceFile(path) => Some(path),
            Self::Builtins => None,
        }
    }

    /// Like [`FileKey::path`], but an error for `Builtins`.
    pub fn to_path(&self) -> Result<&str> {
        self.path().ok_or(LocError::NoPath)
    }

    /// Path for path-bearing variants, [`BUILTINS_LABEL`] for `Builtins`.
    #[must_use]
    pub fn as_display_str(&self) -> &str {
        self.path().unwrap_or(BUILTINS_LABEL)
    }

    /// Rebuild the same variant around `f(path)`. `Builtins` is returned as is.
    #[must_use]
    pub fn map_path<F>(&self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            Self::LibFile(path) => Self::LibFile(f(path)),
            Self::SourceFile(path) => Self::SourceFile(f(path)),
            Self::JsonFile(path) => Self::JsonFile(f(path)),
            Self::ResourceFile(path) => Self::ResourceFile(f(path)),
            Self::Builtins => Self::Builtins,
        }
    }

    /// Evaluate `predicate` on the path. Always false for `Builtins`.
    #[must_use]
    pub fn path_satisfies<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&str) -> bool,
    {
        self.path().is_some_and(predicate)
    }

    #[must_use]
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.path_satisfies(|path| path.ends_with(suffix))
    }

    /// Remove `suffix` from the end of the path.
    ///
    /// Fails with [`LocError::SuffixNotFound`] when the path does not end with
    /// `suffix`. `Builtins` has no path to strip and is returned unchanged.
    pub fn strip_suffix(&self, suffix: &str) -> Result<Self> {
        match self.path() {
            None => Ok(Self::Builtins),
            Some(path) => match path.strip_suffix(suffix) {
                Some(stripped) => Ok(self.map_path(|_| stripped.to_string())),
                None => Err(LocError::SuffixNotFound {
                    path: path.to_string(),
                    suffix: suffix.to_string(),
                }),
            },
        }
    }

    #[must_use]
    pub fn with_suffix(&self, suffix: &str) -> Self {
        self.map_path(|path| format!("{path}{suffix}"))
    }

    /// True for library files and builtins.
    #[must_use]
    pub const fn is_lib(&self) -> bool {
        matches!(self, Self::LibFile(_) | Self::Builtins)
    }
}

impl PartialEq for FileKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FileKey {}

impl PartialOrd for FileKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.path().cmp(&other.path()))
    }
}

impl Hash for FileKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        self.path().hash(state);
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display_str())
    }
}

/// Order two optional sources.
///
/// A present source sorts *before* an absent one, the opposite of
/// `Option`'s own `Ord`. Two present sources compare as [`FileKey`]s.
#[must_use]
pub fn compare_source(a: Option<&FileKey>, b: Option<&FileKey>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(b),
    }
}
