pub mod config;
pub mod core;
pub mod domain;
pub mod normalize;
pub mod sources;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, EtlConfig};
pub use crate::core::{
    etl::{EtlEngine, RunSummary},
    pipeline::DevicePipeline,
};
pub use crate::domain::model::{Category, DeviceRecord, DEVICE_FIELDS};
pub use crate::utils::error::{EtlError, Result};
