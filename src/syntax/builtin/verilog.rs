//! Verilog profile

use crate::syntax::profile::{IgnoreRegion, LanguageProfile};

/// Create Verilog profile
pub fn verilog_profile() -> LanguageProfile {
    LanguageProfile::new(
        &["module", "case", "begin"],
        &["end", "endmodule", "endcase"],
        &[],
    )
    .with_ignore(IgnoreRegion::block(r"/\*", r"\*/"))
    .with_ignore(IgnoreRegion::line("//"))
    .with_ignore(IgnoreRegion::block("\"", "\""))
    .with_extensions(&["v", "sv", "vh"])
}
