//! Token categories produced by the scanner
//!
//! A token is a positioned match of one category's matcher. Ignore and
//! comprehension tokens are structural markers; only block and neutral
//! keywords can ever be colored.

/// Token categories, declared in tie-break order
///
/// When two tokens start at the same offset the one declared first here
/// is processed first. The derived `Ord` relies on this declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCategory {
    /// Opening bracket of a comprehension (`[`)
    OpenComprehension,
    /// Closing bracket of a comprehension (`]`)
    CloseComprehension,
    /// First character of a comment or string
    OpenIgnore,
    /// Last character of a comment or string
    CloseIgnore,
    /// Keyword that opens a block (`if`, `class`, `def`)
    OpenBlock,
    /// Keyword that closes a block (`end`, `fi`)
    CloseBlock,
    /// Keyword that continues a block (`else`, `when`)
    Neutral,
}

impl TokenCategory {
    /// Block and neutral keywords; everything else is a structural marker
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenCategory::OpenBlock | TokenCategory::CloseBlock | TokenCategory::Neutral
        )
    }
}

/// A classified match within the scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Byte offset of the first character
    pub start: usize,
    /// Length in bytes (always at least 1)
    pub length: usize,
    /// What the match means to the classifier
    pub category: TokenCategory,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, length: usize, category: TokenCategory) -> Self {
        Self {
            start,
            length,
            category,
        }
    }

    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Stream ordering key: offset first, then category precedence
    pub fn sort_key(&self) -> (usize, TokenCategory) {
        (self.start, self.category)
    }
}
