mod builder;
mod defaults;
mod file;

pub use builder::{build_config, resolve_config_path};
