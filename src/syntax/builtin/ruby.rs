//! Ruby profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create Ruby profile
pub fn ruby_profile() -> LanguageProfile {
    LanguageProfile::new(
        &["class", "module", "def", "while", "do", "case", "begin", "loop", "if", "unless"],
        &["end"],
        &["elsif", "else", "when", "rescue", "ensure"],
    )
    // =begin/=end documentation blocks
    .with_ignore(IgnoreRegion::block(r"(?m:^)=begin", r"(?m:^)=end"))
    .with_ignore(IgnoreRegion::line("#"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_extensions(&["rb", "rake", "gemspec"])
}
