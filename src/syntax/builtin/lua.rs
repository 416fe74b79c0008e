//! Lua profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create Lua profile
pub fn lua_profile() -> LanguageProfile {
    LanguageProfile::new(
        &["function", "if", "while", "for"],
        &["end"],
        &["then", "else", "elseif"],
    )
    .with_ignore(IgnoreRegion::block(r"--\[\[", r"\]\]"))
    .with_ignore(IgnoreRegion::line("--"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_extensions(&["lua"])
}
