//! CLI command implementations.

mod check;
mod export;

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config, ConfigError};

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;

/// Arguments shared by every command that loads a declaration.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to declaration file (default: auto-discover sitenav.toml).
    #[arg(short, long, env = "SITENAV_CONFIG")]
    config: Option<PathBuf>,

    /// Additional recognized social icon (repeatable).
    #[arg(long = "icon", value_name = "NAME")]
    icons: Vec<String>,
}

impl SourceArgs {
    /// Load and validate the declaration, applying CLI overrides.
    pub(crate) fn load(&self, title: Option<String>) -> Result<Config, ConfigError> {
        let cli_settings = CliSettings {
            title,
            extra_icons: self.icons.clone(),
        };
        Config::load(self.config.as_deref(), Some(&cli_settings))
    }
}
