//! Built-in language profiles
//!
//! This module provides keyword and delimiter rules for languages that
//! close their blocks with keywords rather than braces.

mod cobol;
mod crystal;
mod elixir;
mod julia;
mod lua;
mod ruby;
mod shell;
mod verilog;
mod vhdl;

use super::profile::LanguageProfile;

/// Get all built-in profiles keyed by language id
pub fn all_profiles() -> Vec<(&'static str, LanguageProfile)> {
    vec![
        ("ruby", ruby::ruby_profile()),
        ("lua", lua::lua_profile()),
        ("elixir", elixir::elixir_profile()),
        ("shellscript", shell::shell_profile()),
        ("verilog", verilog::verilog_profile()),
        ("vhdl", vhdl::vhdl_profile()),
        ("crystal", crystal::crystal_profile()),
        ("COBOL", cobol::cobol_profile()),
        ("julia", julia::julia_profile()),
    ]
}
