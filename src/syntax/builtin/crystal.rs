//! Crystal profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create Crystal profile
pub fn crystal_profile() -> LanguageProfile {
    LanguageProfile::new(
        &[
            "class", "module", "struct", "enum", "macro", "def", "if", "while", "case",
            "unless", "until", "try", "do",
        ],
        &["end"],
        &["else", "elseif", "rescue", "ensure"],
    )
    .with_ignore(IgnoreRegion::line("#"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_extensions(&["cr"])
}
