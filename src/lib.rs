//! rainbow-end - depth-cycled coloring of keyword-delimited blocks
//!
//! Languages such as Ruby, Lua or VHDL close blocks with keywords
//! (`if` ... `end`) rather than braces. This crate scans a document,
//! pairs those keywords by nesting depth and assigns each one a palette
//! bucket, so a host editor can color matching openers and closers alike.
//!
//! ```
//! use rainbow_end::syntax::ProfileRegistry;
//!
//! let registry = ProfileRegistry::with_builtin();
//! let colors = registry.assign_colors("if x\n  if y\n  end\nend", "ruby", 3).unwrap();
//! let buckets: Vec<_> = colors.iter().map(|c| c.bucket).collect();
//! assert_eq!(buckets, vec![0, 1, 1, 0]);
//! ```

pub mod config;
pub mod error;
pub mod highlighter;
pub mod render;
pub mod syntax;

pub use error::{RainbowError, Result};
pub use highlighter::Highlighter;
