pub mod config;
pub mod logging;

pub mod fetcher;
pub mod sweep;
pub mod task;
