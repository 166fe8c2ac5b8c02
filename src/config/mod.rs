mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, default_config_toml};
pub use model::{
    ChartsConfig, Config, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_PRODUCT_PREFIX,
    DEFAULT_SLOW_WARNING_SECS, DEFAULT_STORAGE_ESTIMATE_BYTES, ExportConfig,
};
pub use validation::validate_config_semantics;
