//! VHDL profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create VHDL profile
pub fn vhdl_profile() -> LanguageProfile {
    LanguageProfile::new(
        &["entity", "component", "case", "begin"],
        &["end", "endcase"],
        &[],
    )
    .with_ignore(IgnoreRegion::line("--"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_extensions(&["vhd", "vhdl"])
}
