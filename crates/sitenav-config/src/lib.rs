//! Navigation and sidebar configuration for documentation sites.
//!
//! A site declares its title, top navigation, grouped sidebar and social links
//! as plain data. [`build`] validates a [`SiteDeclaration`] and returns an
//! immutable [`SiteConfig`] that a static-site renderer consumes as-is.
//!
//! [`Config::load`] reads a declaration from `sitenav.toml` (or an explicit
//! `.toml`, `.yaml` or `.json` file), auto-discovering the file in parent
//! directories.
//!
//! ## Environment Variable Expansion
//!
//! `title`, `description` and every `link` support:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Example
//!
//! ```
//! use sitenav_config::{build, NavItemDeclaration, SiteDeclaration};
//!
//! let decl = SiteDeclaration {
//!     title: Some("SeraJS".to_owned()),
//!     nav: vec![NavItemDeclaration::new("Home", "/")],
//!     ..SiteDeclaration::default()
//! };
//! let site = build(&decl)?;
//! assert_eq!(site.nav()[0].link(), "/");
//! # Ok::<(), sitenav_config::BuildError>(())
//! ```

mod declaration;
mod error;
mod expand;
mod icons;
mod link;
mod model;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use declaration::{
    NavItemDeclaration, SidebarGroupDeclaration, SiteDeclaration, SocialLinkDeclaration,
};
pub use error::{BuildError, ConfigError, UnknownIconError, ValidationError};
pub use icons::IconSet;
pub use model::{NavItem, SidebarGroup, SiteConfig, SocialLink, build, build_with_icons};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only set values override the loaded file.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site title.
    pub title: Option<String>,
    /// Additional recognized social icons.
    pub extra_icons: Vec<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Declaration file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Detect format from the file extension, defaulting to TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// Declaration file contents: the site plus the icon allow-list section.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(flatten)]
    site: SiteDeclaration,
    #[serde(default)]
    icons: IconsSection,
}

/// `[icons]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IconsSection {
    /// Replaces the default icon set when present.
    known: Option<Vec<String>>,
    /// Added to the (default or replaced) icon set.
    extra: Vec<String>,
}

impl IconsSection {
    fn resolve(&self) -> IconSet {
        let base = match &self.known {
            Some(known) => IconSet::new(known.iter().cloned()),
            None => IconSet::default(),
        };
        base.with(self.extra.iter().cloned())
    }
}

/// Loaded and validated site configuration.
#[derive(Debug)]
pub struct Config {
    /// Validated navigation data.
    pub site: SiteConfig,
    /// Icon set the site was validated against.
    pub icons: IconSet,
    /// Path to the config file (`None` when parsed from a string).
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file exists, or the first parse,
    /// expansion or validation error.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };

        tracing::debug!(path = %path.display(), "Loading site configuration");
        let content = std::fs::read_to_string(&path)?;
        let mut config = Self::parse(&content, Format::from_path(&path), cli_settings)?;
        config.config_path = Some(path);
        Ok(config)
    }

    /// Parse, expand, override and validate a declaration from a string.
    ///
    /// # Errors
    ///
    /// Returns the first parse, expansion or validation error.
    pub fn parse(
        content: &str,
        format: Format,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut file = parse_file(content, format)?;

        expand::expand_declaration(&mut file.site)?;

        let mut icons = file.icons.resolve();
        if let Some(settings) = cli_settings {
            apply_cli_settings(&mut file.site, &mut icons, settings);
        }

        let site = build_with_icons(&file.site, &icons)?;
        tracing::info!(
            title = site.title(),
            groups = site.sidebar().len(),
            links = site.link_count(),
            "Site configuration validated"
        );

        Ok(Self {
            site,
            icons,
            config_path: None,
        })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}

fn parse_file(content: &str, format: Format) -> Result<ConfigFile, ConfigError> {
    let parse_error = |message: String| ConfigError::Parse {
        format: format.name(),
        message,
    };
    match format {
        Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Yaml if content.trim().is_empty() => Ok(ConfigFile::default()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Apply CLI settings to the declaration and icon set.
fn apply_cli_settings(site: &mut SiteDeclaration, icons: &mut IconSet, settings: &CliSettings) {
    if let Some(title) = &settings.title {
        site.title = Some(title.clone());
    }
    icons.extend(settings.extra_icons.iter().cloned());
}
