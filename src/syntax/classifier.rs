//! Depth classifier
//!
//! A single pass over the token stream that tracks block depth and turns
//! each visible keyword into a color assignment. Markers for ignore regions
//! and comprehensions only switch the mode; they are never colored.
//!
//! Only one mode is active at a time. An ignore region opened inside a
//! comprehension drops the comprehension; keywords after the region are
//! classified as if the brackets had closed.

use super::style::bucket_index;
use super::tokens::{Token, TokenCategory};
use crate::error::Result;

/// A colored keyword span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAssignment {
    /// Byte offset of the keyword
    pub start: usize,
    /// Length in bytes
    pub length: usize,
    /// Palette slot, already reduced modulo the palette size
    pub bucket: usize,
}

/// Classifier mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Default,
    Ignore,
    /// Inside `n >= 1` nested comprehension brackets
    Comprehension(usize),
}

/// Depth state machine
///
/// Feed tokens in stream order with `step`; each call yields at most one
/// unreduced bucket.
#[derive(Debug, Clone)]
pub struct DepthClassifier {
    mode: Mode,
    depth: usize,
}

impl DepthClassifier {
    pub fn new() -> Self {
        Self {
            mode: Mode::Default,
            depth: 0,
        }
    }

    /// Current block depth (never negative)
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Advance over one token, returning the bucket to color it with
    pub fn step(&mut self, category: TokenCategory) -> Option<usize> {
        use super::tokens::TokenCategory::*;

        match (self.mode, category) {
            (Mode::Ignore, CloseIgnore) => {
                self.mode = Mode::Default;
                None
            }
            (Mode::Ignore, _) => None,

            (Mode::Default | Mode::Comprehension(_), OpenIgnore) => {
                self.mode = Mode::Ignore;
                None
            }
            (Mode::Default, OpenComprehension) => {
                self.mode = Mode::Comprehension(1);
                None
            }
            (Mode::Comprehension(n), OpenComprehension) => {
                self.mode = Mode::Comprehension(n + 1);
                None
            }
            (Mode::Comprehension(n), CloseComprehension) => {
                self.mode = if n > 1 {
                    Mode::Comprehension(n - 1)
                } else {
                    Mode::Default
                };
                None
            }
            // Stray closers outside their region
            (_, CloseIgnore | CloseComprehension) => None,

            (Mode::Comprehension(_), OpenBlock | CloseBlock | Neutral) => Some(self.depth + 1),

            (Mode::Default, OpenBlock) => {
                let bucket = self.depth;
                self.depth += 1;
                Some(bucket)
            }
            (Mode::Default, CloseBlock) => {
                self.depth = self.depth.saturating_sub(1);
                Some(self.depth)
            }
            (Mode::Default, Neutral) => self.depth.checked_sub(1),
        }
    }
}

impl Default for DepthClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a whole token stream
///
/// Fails only when `palette_size` is zero.
pub fn classify(tokens: &[Token], palette_size: usize) -> Result<Vec<ColorAssignment>> {
    bucket_index(0, palette_size)?;

    let mut classifier = DepthClassifier::new();
    let mut assignments = Vec::new();
    for token in tokens {
        if let Some(bucket) = classifier.step(token.category) {
            assignments.push(ColorAssignment {
                start: token.start,
                length: token.length,
                bucket: bucket_index(bucket, palette_size)?,
            });
        }
    }
    Ok(assignments)
}
