//! COBOL profile
//!
//! Scope terminators carry a hyphen (`end-if`), which the boundary rules
//! accept as part of the keyword.

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create COBOL profile
pub fn cobol_profile() -> LanguageProfile {
    LanguageProfile::new(
        &["perform", "read", "call", "evaluate", "if"],
        &["end-perform", "end-read", "end-call", "end-evaluate", "end-if"],
        &["else", "when"],
    )
    .with_case_sensitive(true)
    .with_ignore(IgnoreRegion::line(r"\*>"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_extensions(&["cob", "cbl", "cpy"])
}
