//! Block keyword scanning and depth coloring
//!
//! This module provides the pipeline from raw text to colored keywords:
//! - Language profiles and their compiled matchers
//! - The scanner producing a sorted token stream
//! - The depth classifier assigning palette buckets
//! - Offset to line/column resolution for renderers

mod builtin;
mod classifier;
mod position;
mod profile;
mod registry;
mod rules;
mod scanner;
mod style;
mod tokens;

pub use classifier::{classify, ColorAssignment, DepthClassifier};
pub use position::{ranges_by_bucket, Cursor, LineIndex, Position, Range};
pub use profile::{parse_profiles, ComprehensionDelimiter, IgnoreRegion, LanguageProfile};
pub use registry::ProfileRegistry;
pub use rules::CompiledProfile;
pub use scanner::scan;
pub use style::{bucket_index, Color, Palette};
pub use tokens::{Token, TokenCategory};
