//! Shell script profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create shell script profile
pub fn shell_profile() -> LanguageProfile {
    LanguageProfile::new(
        &["for", "if", "while", "until", "case"],
        &["fi", "done", "esac"],
        &["do", "in", "then", "elif", "else"],
    )
    .with_ignore(IgnoreRegion::line("#"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_ignore(IgnoreRegion::block("'", "'"))
    .with_extensions(&["sh", "bash", "zsh", "ksh"])
}
