pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::sources::{SourceFiles, SourceKind};
use crate::utils::error::Result;
use crate::utils::validation::{validate_csv_file, validate_file_name, validate_path, Validate};
use std::path::Path;
use toml_config::TomlConfig;

pub const DEFAULT_DATASETS_DIR: &str = "datasets";
pub const DEFAULT_OUTPUT_FILE: &str = "devices.csv";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct EtlConfig {
    pub datasets_dir: String,
    pub output_path: String,
    pub source_files: SourceFiles,
    pub monitor: bool,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self::for_datasets_dir(DEFAULT_DATASETS_DIR)
    }
}

impl EtlConfig {
    /// Default layout: sources and `devices.csv` side by side in one directory.
    pub fn for_datasets_dir(datasets_dir: impl Into<String>) -> Self {
        let datasets_dir = datasets_dir.into();
        let output_path = Path::new(&datasets_dir)
            .join(DEFAULT_OUTPUT_FILE)
            .to_string_lossy()
            .into_owned();
        Self {
            datasets_dir,
            output_path,
            source_files: SourceFiles::default(),
            monitor: false,
        }
    }

    /// Layers explicit overrides on top of an optional settings file.
    pub fn resolve(
        file: Option<TomlConfig>,
        datasets_dir: Option<String>,
        output: Option<String>,
        monitor: bool,
    ) -> Self {
        let file = file.unwrap_or_default();
        let datasets_dir = datasets_dir
            .or(file.paths.datasets_dir)
            .unwrap_or_else(|| DEFAULT_DATASETS_DIR.to_string());
        let mut config = Self::for_datasets_dir(datasets_dir);

        if let Some(output) = output.or(file.paths.output) {
            config.output_path = output;
        }
        config.source_files = file.sources;
        config.monitor = monitor || file.monitoring.enabled;
        config
    }
}

impl ConfigProvider for EtlConfig {
    fn datasets_dir(&self) -> &str {
        &self.datasets_dir
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn source_files(&self) -> &SourceFiles {
        &self.source_files
    }
}

impl Validate for EtlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("paths.datasets_dir", &self.datasets_dir)?;
        validate_csv_file("paths.output", &self.output_path)?;
        for kind in SourceKind::ALL {
            let field = format!("sources.{}", kind.name());
            validate_file_name(&field, self.source_files.file_for(kind))?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use super::toml_config::TomlConfig;
    use super::EtlConfig;
    use crate::utils::error::Result;
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "device-etl")]
    #[command(about = "Normalize laptop, phone and tablet exports into one devices table")]
    pub struct CliConfig {
        /// Directory holding the source exports
        #[arg(long)]
        pub datasets_dir: Option<String>,

        /// Output CSV path (default: <datasets-dir>/devices.csv)
        #[arg(long)]
        pub output: Option<String>,

        /// Optional TOML settings file
        #[arg(long)]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log CPU and memory usage per phase")]
        pub monitor: bool,
    }

    impl CliConfig {
        pub fn resolve(&self) -> Result<EtlConfig> {
            let file = self.config.as_deref().map(TomlConfig::from_file).transpose()?;
            Ok(EtlConfig::resolve(
                file,
                self.datasets_dir.clone(),
                self.output.clone(),
                self.monitor,
            ))
        }
    }
}
