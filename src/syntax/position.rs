//! Offset to line/column resolution
//!
//! Assignments carry byte offsets into the scanned text. Renderers work in
//! lines and columns, so the host groups assignments by bucket and resolves
//! each span here.

use super::classifier::ColorAssignment;

/// Zero-based line/column location; `column` counts chars
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Line start table for one document snapshot
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the first character of each line
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    /// Number of lines (a trailing newline starts an empty last line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Resolve a byte offset, clamped to the end of the text
    ///
    /// Offsets inside a multi-byte character resolve past that character.
    pub fn position_at(&self, offset: usize) -> Position {
        self.cursor().position_at(offset)
    }

    /// Resolve a `start..start+length` span
    pub fn range(&self, start: usize, length: usize) -> Range {
        self.cursor().range(start, length)
    }

    /// Resolver that remembers where it stopped
    ///
    /// Resolving offsets in ascending order through one cursor counts each
    /// character of a line once, however many spans the line holds.
    pub fn cursor(&self) -> Cursor<'_, 'a> {
        Cursor {
            index: self,
            offset: 0,
            position: Position::new(0, 0),
        }
    }

    fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }
}

/// Incremental offset resolver over a `LineIndex`
pub struct Cursor<'i, 'a> {
    index: &'i LineIndex<'a>,
    /// Char boundary the column count has reached
    offset: usize,
    position: Position,
}

impl Cursor<'_, '_> {
    pub fn position_at(&mut self, offset: usize) -> Position {
        let text = self.index.text;
        let offset = offset.min(text.len());
        let line = self.index.line_of(offset);
        if line != self.position.line || offset < self.offset {
            self.offset = self.index.line_starts[line];
            self.position = Position::new(line, 0);
        }

        for ch in text[self.offset..].chars() {
            if self.offset >= offset {
                break;
            }
            self.offset += ch.len_utf8();
            self.position.column += 1;
        }
        self.position
    }

    pub fn range(&mut self, start: usize, length: usize) -> Range {
        Range {
            start: self.position_at(start),
            end: self.position_at(start + length),
        }
    }
}

/// Group assignments into one range list per palette bucket
///
/// The result always has `palette_size` entries so the host can replace
/// every bucket's style wholesale, including buckets that became empty.
pub fn ranges_by_bucket(
    assignments: &[ColorAssignment],
    index: &LineIndex<'_>,
    palette_size: usize,
) -> Vec<Vec<Range>> {
    let mut buckets = vec![Vec::new(); palette_size];
    // assignments arrive in offset order
    let mut cursor = index.cursor();
    for assignment in assignments {
        if let Some(bucket) = buckets.get_mut(assignment.bucket) {
            bucket.push(cursor.range(assignment.start, assignment.length));
        }
    }
    buckets
}
