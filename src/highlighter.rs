//! Host-facing highlighter
//!
//! Couples a shared profile registry with the current palette. Every call
//! re-scans the whole document and returns the complete bucket to ranges
//! map; hosts replace their previous styling wholesale.

use std::sync::Arc;

use tracing::warn;

use crate::error::Result;
use crate::syntax::{ranges_by_bucket, ColorAssignment, LineIndex, Palette, ProfileRegistry, Range};

pub struct Highlighter {
    registry: Arc<ProfileRegistry>,
    palette: Palette,
}

impl Highlighter {
    pub fn new(registry: Arc<ProfileRegistry>, palette: Palette) -> Self {
        Self { registry, palette }
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette; the host should re-highlight open documents
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Color assignments for a document
    ///
    /// On a configuration error the document is skipped and nothing is
    /// emitted; the next call retries with whatever is configured then.
    pub fn assignments(&self, text: &str, language: &str) -> Result<Vec<ColorAssignment>> {
        self.registry
            .assign_colors(text, language, self.palette.size())
            .map_err(|e| {
                warn!(language, error = %e, "skipping scan");
                e
            })
    }

    /// Ranges to style, one list per palette bucket
    pub fn highlight(&self, text: &str, language: &str) -> Result<Vec<Vec<Range>>> {
        let assignments = self.assignments(text, language)?;
        let index = LineIndex::new(text);
        Ok(ranges_by_bucket(&assignments, &index, self.palette.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Color, Position};

    fn highlighter() -> Highlighter {
        Highlighter::new(Arc::new(ProfileRegistry::with_builtin()), Palette::default())
    }

    #[test]
    fn test_highlight_groups_by_bucket() {
        let hl = highlighter();
        let buckets = hl.highlight("while x do\n  if y then\n  end\nend", "lua").unwrap();

        assert_eq!(buckets.len(), 3);
        // while, end
        assert_eq!(buckets[0].len(), 2);
        // if, then, end
        assert_eq!(buckets[1].len(), 3);
        assert_eq!(buckets[1][0].start, Position::new(1, 2));
    }

    #[test]
    fn test_palette_change() {
        let mut hl = highlighter();
        hl.set_palette(Palette::new(vec![Color::Red]).unwrap());

        let buckets = hl.highlight("if x then\n  if y then\n  end\nend", "lua").unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].len(), 6);
    }

    #[test]
    fn test_unknown_language_emits_nothing() {
        let hl = highlighter();
        assert!(hl.highlight("if x\nend", "cobra").is_err());
    }
}
