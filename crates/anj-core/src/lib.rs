pub mod config;
pub mod logging;

pub mod catalog;
pub mod collect;
pub mod convert;
pub mod favicon;
pub mod storage;
