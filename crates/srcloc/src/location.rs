use crate::file_key::compare_source;
use crate::{FileKey, Position};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Label rendered in place of a missing source.
const NO_SOURCE_LABEL: &str = "<NONE>";

/// A span of source text: a classification plus start and end positions.
///
/// Nothing requires `start <= end`. Inverted or degenerate spans are kept as
/// given and every operation below still answers according to its rules.
///
/// `Ord` is a total order (source, then start, then end) fit for sorting and
/// for ordered collections. Containment is a separate question answered by
/// [`Location::span_compare`] and [`Location::contains`].
#[derive(Debug, Clone, Default)]
pub struct Location {
    pub source: Option<FileKey>,
    pub start: Position,
    pub end: Position,
}

/// Outcome of asking whether one location encloses another.
///
/// Only [`Containment::Contains`] is meaningful as an answer; the other
/// variants say *why* containment failed and are not a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    /// Same source, inner start and end are both within the outer span
    Contains,
    /// Inner starts before the outer span
    EscapesLeft,
    /// Inner ends after the outer span
    EscapesRight,
    /// The sources differ; carries their [`compare_source`] result
    OtherSource(Ordering),
}

impl Containment {
    #[must_use]
    pub const fn is_contained(self) -> bool {
        matches!(self, Self::Contains)
    }
}

impl Location {
    /// Placeholder for "no real location": no source, all positions zero.
    pub const NONE: Self = Self {
        source: None,
        start: Position::ZERO,
        end: Position::ZERO,
    };

    #[must_use]
    pub const fn new(source: Option<FileKey>, start: Position, end: Position) -> Self {
        Self { source, start, end }
    }

    /// Zero-width location at `line`/`column`.
    #[must_use]
    pub const fn cursor(source: Option<FileKey>, line: usize, column: usize) -> Self {
        let position = Position::new(line, column, 0);
        Self::new(source, position, position)
    }

    #[must_use]
    pub fn source(&self) -> Option<&FileKey> {
        self.source.as_ref()
    }

    /// Same span, different source.
    #[must_use]
    pub fn with_source(&self, source: Option<FileKey>) -> Self {
        Self::new(source, self.start, self.end)
    }

    /// True for [`Location::NONE`].
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.source.is_none() && self.is_none_ignore_source()
    }

    /// True when both positions are zero, whatever the source.
    #[must_use]
    pub const fn is_none_ignore_source(&self) -> bool {
        self.start.is_zero() && self.end.is_zero()
    }

    /// Does `self` completely contain `inner`?
    ///
    /// Sources are compared first; when they match, an inner start before
    /// ours escapes to the left, and otherwise an inner end after ours
    /// escapes to the right.
    #[must_use]
    pub fn span_compare(&self, inner: &Self) -> Containment {
        match compare_source(self.source(), inner.source()) {
            Ordering::Equal => {}
            ordering => return Containment::OtherSource(ordering),
        }
        if inner.start.compare(&self.start) == Ordering::Less {
            return Containment::EscapesLeft;
        }
        if inner.end.compare(&self.end) == Ordering::Greater {
            return Containment::EscapesRight;
        }
        Containment::Contains
    }

    #[must_use]
    pub fn contains(&self, inner: &Self) -> bool {
        self.span_compare(inner).is_contained()
    }

    /// From the start of `self` to the end of `end`, in `self`'s source.
    #[must_use]
    pub fn between(&self, end: &Self) -> Self {
        Self::new(self.source.clone(), self.start, end.end)
    }

    /// The region strictly between `self` and `next`: from the end of `self`
    /// to the start of `next`, in `self`'s source.
    #[must_use]
    pub fn gap_between(&self, next: &Self) -> Self {
        Self::new(self.source.clone(), self.end, next.start)
    }

    /// The character just before the start.
    ///
    /// At column zero there is no way to step back onto the previous line, so
    /// the start stays where it is.
    #[must_use]
    pub fn char_before(&self) -> Self {
        let Position {
            line,
            column,
            offset,
        } = self.start;
        let start = if column > 0 {
            Position::new(line, column - 1, offset.saturating_sub(1))
        } else {
            self.start
        };
        Self::new(self.source.clone(), start, self.start)
    }

    /// One character wide at the start.
    ///
    /// Wrong if that character is a line terminator, but still consistent for
    /// ordering.
    #[must_use]
    pub fn first_char(&self) -> Self {
        let Position {
            line,
            column,
            offset,
        } = self.start;
        let end = Position::new(line, column.saturating_add(1), offset.saturating_add(1));
        Self::new(self.source.clone(), self.start, end)
    }

    #[must_use]
    pub fn start_loc(&self) -> Self {
        Self::new(self.source.clone(), self.start, self.start)
    }

    #[must_use]
    pub fn end_loc(&self) -> Self {
        Self::new(self.source.clone(), self.end, self.end)
    }

    /// Same source, and the line ranges overlap.
    #[must_use]
    pub fn lines_intersect(&self, other: &Self) -> bool {
        compare_source(self.source(), other.source()) == Ordering::Equal
            && self.start.line <= other.end.line
            && other.start.line <= self.end.line
    }

    /// `(startLine, startCol) to (endLine, endCol)`, optionally prefixed
    /// with the quoted source label.
    #[must_use]
    pub fn display_text(&self, include_source: bool) -> String {
        let span = format!("{} to {}", self.start, self.end);
        if !include_source {
            return span;
        }
        let label = self
            .source()
            .map_or(NO_SOURCE_LABEL, FileKey::as_display_str);
        format!("{label:?}: {span}")
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Location {}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_source(self.source(), other.source())
            .then_with(|| self.start.compare(&other.start))
            .then_with(|| self.end.compare(&other.end))
    }
}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text(true))
    }
}
