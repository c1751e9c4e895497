//! Command handlers, one per binary.

mod collect_icons;
mod toml2json;

pub use collect_icons::run_collect_icons;
pub use toml2json::run_toml2json;
