//! Site configuration file support.
//!
//! Loads an optional TOML file that overrides the page defaults. Every key
//! is optional:
//!
//! ```toml
//! title = "Floating Todo App"
//! install_url = "https://chromewebstore.google.com/detail/floating-todo-app/..."
//! copyright_year = 2025
//!
//! [screenshot]
//! src = "/screen.png"
//! alt = "Floating Todo Widget Demo"
//! width = 256
//! height = 384
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::types::{PageConfig, Screenshot};

/// Errors raised while loading a site config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid install_url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("invalid screenshot: {0}")]
    InvalidScreenshot(&'static str),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub title: Option<String>,
    pub install_url: Option<String>,
    pub copyright_year: Option<i32>,
    pub screenshot: ScreenshotConfig,
}

/// Overrides for the demo screenshot
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenshotConfig {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl SiteConfig {
    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Merge onto the page defaults and validate the result.
    pub fn into_page_config(self) -> Result<PageConfig, ConfigError> {
        let defaults = PageConfig::default();
        let shot = Screenshot::default();

        let config = PageConfig {
            title: self.title.unwrap_or(defaults.title),
            install_url: self.install_url.unwrap_or(defaults.install_url),
            screenshot: Screenshot {
                src: self.screenshot.src.unwrap_or(shot.src),
                alt: self.screenshot.alt.unwrap_or(shot.alt),
                width: self.screenshot.width.unwrap_or(shot.width),
                height: self.screenshot.height.unwrap_or(shot.height),
            },
            copyright_year: self.copyright_year,
        };

        validate(&config)?;
        Ok(config)
    }
}

/// Check the outbound link and the screenshot asset reference.
pub fn validate(config: &PageConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.install_url).map_err(|e| ConfigError::InvalidUrl {
        url: config.install_url.clone(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            url: config.install_url.clone(),
            reason: format!("unsupported scheme `{}`", url.scheme()),
        });
    }

    let shot = &config.screenshot;
    if shot.src.trim().is_empty() {
        return Err(ConfigError::InvalidScreenshot("src is empty"));
    }
    if shot.width == 0 || shot.height == 0 {
        return Err(ConfigError::InvalidScreenshot("width and height must be non-zero"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn empty_config_yields_defaults() {
        let config = SiteConfig::parse("").expect("parse");
        let page = config.into_page_config().expect("valid");
        assert_eq!(page, PageConfig::default());
    }

    #[test]
    fn partial_config_overrides_only_given_keys() {
        let config = SiteConfig::parse(
            r#"
copyright_year = 2025

[screenshot]
width = 300
"#,
        )
        .expect("parse");
        let page = config.into_page_config().expect("valid");

        assert_eq!(page.copyright_year, Some(2025));
        assert_eq!(page.screenshot.width, 300);
        assert_eq!(page.screenshot.height, 384);
        assert_eq!(page.install_url, PageConfig::default().install_url);
    }

    #[test]
    fn load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("landing.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
title = "Floating Todo - Beta"
install_url = "https://example.com/install"

[screenshot]
src = "assets/widget.png"
alt = "Widget"
"#
        )
        .expect("write config");

        let page = SiteConfig::load_from_path(&config_path)
            .expect("load")
            .into_page_config()
            .expect("valid");
        assert_eq!(page.title, "Floating Todo - Beta");
        assert_eq!(page.install_url, "https://example.com/install");
        assert_eq!(page.screenshot.src, "assets/widget.png");
        assert_eq!(page.screenshot.alt, "Widget");
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("landing.toml");
        std::fs::write(&config_path, "title = ").expect("write config");

        let err = SiteConfig::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("landing.toml"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(SiteConfig::parse("instal_url = \"https://example.com\"").is_err());
    }

    #[test]
    fn rejects_non_http_install_url() {
        let config = SiteConfig {
            install_url: Some("ftp://example.com/app".into()),
            ..Default::default()
        };
        let err = config.into_page_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn rejects_unparseable_install_url() {
        let config = SiteConfig {
            install_url: Some("not a url".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.into_page_config(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn rejects_zero_sized_screenshot() {
        let config = SiteConfig {
            screenshot: ScreenshotConfig {
                height: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.into_page_config(),
            Err(ConfigError::InvalidScreenshot(_))
        ));
    }

    #[test]
    fn rejects_empty_screenshot_src() {
        let config = SiteConfig {
            screenshot: ScreenshotConfig {
                src: Some("  ".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            config.into_page_config(),
            Err(ConfigError::InvalidScreenshot(_))
        ));
    }
}
