//! Asset loading with embedded fallbacks
//!
//! The upload page and the default `config.yaml` are compiled into the
//! binary. The config can be overridden on disk:
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded config only
//! - If `CONFIG_FILE` IS set and the file exists: read it from the filesystem
//! - If `CONFIG_FILE` IS set but missing: fall back to the embedded config
//!   (`tonewise init` writes a copy there for editing)

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded web page served at `/`
#[derive(RustEmbed)]
#[folder = "static/"]
#[include = "*.html"]
struct EmbeddedStatic;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Where the effective configuration comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => f.write_str("embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override for the config
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if `CONFIG_FILE` was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CONFIG_FILE` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Which config will actually be read
    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            _ => ConfigSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let ConfigSource::File(path) = self.config_source() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(&path)?));
        }
        Self::embedded_config()
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The config compiled into the binary
    pub fn embedded_config() -> io::Result<Cow<'static, [u8]>> {
        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// The upload page served at `/`
    pub fn index_html() -> Option<Cow<'static, [u8]>> {
        EmbeddedStatic::get("index.html").map(|f| f.data)
    }

    /// Write the embedded config to disk for customization
    ///
    /// Targets `CONFIG_FILE` if configured, otherwise `./config.yaml`.
    /// Existing files are left alone unless `force` is set.
    pub fn init(&self, force: bool) -> io::Result<InitReport> {
        let path = self
            .config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from("./config.yaml"));
        Self::write_config(&path, force)
    }

    fn write_config(path: &Path, force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        if !force && path.exists() {
            report.skipped.push(path.display().to_string());
            return Ok(report);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = Self::embedded_config()?;
        fs::write(path, &*data)?;
        report.written.push(path.display().to_string());

        Ok(report)
    }
}
