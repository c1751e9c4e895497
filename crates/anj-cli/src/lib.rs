//! Entry points for the `collect-icons` and `toml2json` binaries.

pub mod cli;
