//! `sitenav export` command implementation.

use std::path::PathBuf;

use clap::Args;
use console::Term;
use sitenav_config::SiteConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,

    /// Site title (overrides config).
    #[arg(long)]
    title: Option<String>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration is invalid or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.source.load(self.title)?;
        let json = render_json(&config.site, self.pretty)?;

        match self.output {
            Some(path) => {
                write_json(&path, &json)?;
                Output::new().success(&format!("Navigation written to {}", path.display()));
            }
            None => Term::stdout().write_line(&json)?,
        }
        Ok(())
    }
}

/// Serialize a validated site for the renderer.
fn render_json(site: &SiteConfig, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(site)
    } else {
        serde_json::to_string(site)
    }
}

fn write_json(path: &std::path::Path, json: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, format!("{json}\n"))?;
    tracing::info!(path = %path.display(), bytes = json.len(), "Exported navigation");
    Ok(())
}
