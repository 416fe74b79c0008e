//! Elixir profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create Elixir profile
pub fn elixir_profile() -> LanguageProfile {
    LanguageProfile::new(
        &[
            "defmodule", "defmacro", "def", "if", "while", "for", "case", "cond", "unless",
            "try", "quote", "with",
        ],
        &["end"],
        &["do", "else", "elseif", "rescue", "after"],
    )
    // Heredocs must be tried before plain strings
    .with_ignore(IgnoreRegion::block("\"\"\"", "\"\"\""))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_ignore(IgnoreRegion::line("#"))
    .with_extensions(&["ex", "exs"])
}
