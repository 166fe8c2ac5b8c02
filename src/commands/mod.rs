pub mod categories;
pub mod export;
pub mod init;

pub use categories::{categories_text, run_categories};
pub use export::{format_failure, run_export, run_export_impl};
pub use init::{run_init, run_init_impl};
