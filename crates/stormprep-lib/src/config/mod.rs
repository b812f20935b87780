mod loader;
mod model;

pub use loader::load_config;
pub use model::{Config, OutputConfig};
pub use model::{DEFAULT_BASE_URL, DEFAULT_MANIFEST_PATH, DEFAULT_OUTPUT_DIR};
