use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single point in source text.
///
/// `line` and `column` are whatever base the producer uses, as long as it is
/// consistent. `offset` is a flat index into the text and only feeds the
/// arithmetic in [`Location::char_before`](crate::Location::char_before) and
/// [`Location::first_char`](crate::Location::first_char): equality, hashing
/// and ordering all look at `(line, column)` alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// `{0, 0, 0}`, the position used by [`Location::NONE`](crate::Location::NONE).
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Compare by line, then column. The offset is ignored.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }

    /// True when every coordinate, offset included, is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.line == 0 && self.column == 0 && self.offset == 0
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.line.hash(state);
        self.column.hash(state);
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.line, self.column)
    }
}
