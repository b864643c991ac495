//! Configuration management.

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use defaults::{default_template_path, vigil_dir};
pub use loading::{load_hierarchy, merge_configs};
pub use types::VigilConfig;
pub use validation::validate_config;
