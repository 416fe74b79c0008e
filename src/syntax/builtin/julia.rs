//! Julia profile
//!
//! Keywords inside `[...]` are comprehension clauses (`[x for x in xs if p(x)]`)
//! and never open a block of their own.

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create Julia profile
pub fn julia_profile() -> LanguageProfile {
    LanguageProfile::new(
        &[
            "function", "if", "for", "while", "begin", "let", "quote", "try", "module",
            "baremodule", "mutable struct", "struct", "macro", "do",
        ],
        &["end"],
        &["else", "elseif", "catch", "finally"],
    )
    .with_case_sensitive(true)
    .with_ignore(IgnoreRegion::block("#=", "=#"))
    .with_ignore(IgnoreRegion::line("#"))
    .with_ignore(IgnoreRegion::block("\"\"\"", "\"\"\""))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_comprehension(r"\[", r"\]")
    .with_extensions(&["jl"])
}
