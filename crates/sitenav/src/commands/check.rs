//! `sitenav check` command implementation.

use clap::Args;
use sitenav_config::SiteConfig;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load(None)?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.highlight(config.site.title());
        for line in summary(&config.site) {
            output.info(&line);
        }
        output.success("Navigation is valid");
        Ok(())
    }
}

/// Human-readable counts for a validated site.
fn summary(site: &SiteConfig) -> Vec<String> {
    let sidebar_items: usize = site.sidebar().iter().map(|g| g.items().len()).sum();
    vec![
        format!("  nav entries:    {}", site.nav().len()),
        format!(
            "  sidebar groups: {} ({sidebar_items} links)",
            site.sidebar().len()
        ),
        format!("  social links:   {}", site.social_links().len()),
    ]
}
