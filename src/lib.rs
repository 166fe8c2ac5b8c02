pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod logging;
pub mod model;
pub mod output;
pub mod reduce;

pub use error::{ReportError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_EXPORT_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
