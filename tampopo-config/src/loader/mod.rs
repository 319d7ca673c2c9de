//! Resolution of the effective [`InteractionConfig`].
//!
//! Evaluation order:
//! 1) an explicit file (`$TAMPOPO_INTERACTION_CONFIG_PATH`, TOML or JSON),
//! 2) inline JSON (`$TAMPOPO_INTERACTION_CONFIG_JSON`),
//! 3) the first existing default candidate under the loader root,
//! 4) compiled defaults.
//!
//! Whatever the source, the result passes through the guard rails before it
//! is handed out.

pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::constants::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_CANDIDATES,
};
use crate::models::InteractionConfig;
use crate::validation::{ConfigWarnings, apply_guard_rails};

use error::ConfigLoadError;

/// Source that produced the interaction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// A validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: InteractionConfig,
    pub source: InteractionConfigSource,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    root: Option<PathBuf>,
    path_override: Option<PathBuf>,
    inline_override: Option<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader primed with the environment overrides, ignoring blank values.
    pub fn from_env() -> Self {
        let path_override = env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let inline_override = env::var(CONFIG_JSON_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());

        Self {
            root: None,
            path_override,
            inline_override,
        }
    }

    /// Directory the default candidates are resolved against. Defaults to
    /// the process working directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_override = Some(path.into());
        self
    }

    pub fn with_inline_json(mut self, raw: impl Into<String>) -> Self {
        self.inline_override = Some(raw.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (config, source) = self.resolve()?;
        let warnings = apply_guard_rails(&config)?;

        tracing::info!(?source, "interaction config loaded");
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => {
                    tracing::warn!(hint = %hint, "{}", warning.message)
                }
                None => tracing::warn!("{}", warning.message),
            }
        }

        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn resolve(
        &self,
    ) -> Result<(InteractionConfig, InteractionConfigSource), ConfigLoadError>
    {
        if let Some(path) = &self.path_override {
            let config = load_from_file(path)?;
            return Ok((config, InteractionConfigSource::EnvPath(path.clone())));
        }

        if let Some(raw) = &self.inline_override {
            let config = parse_json(raw, CONFIG_JSON_ENV)?;
            return Ok((config, InteractionConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, InteractionConfigSource::File(path)));
        }

        Ok((InteractionConfig::default(), InteractionConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self.root.as_deref().unwrap_or_else(|| Path::new(""));
        DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

pub fn load_from_file(
    path: &Path,
) -> Result<InteractionConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let origin = path.display().to_string();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents, &origin),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                origin,
                reason: err.to_string(),
            })
        }
        _ => parse_from_str(&contents, &origin),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> Result<InteractionConfig, ConfigLoadError> {
    // Try TOML first, then JSON for convenience.
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            ConfigLoadError::Parse {
                origin: origin.to_string(),
                reason: format!(
                    "toml error: {toml_err}; json error: {json_err}"
                ),
            }
        })
    })
}

pub fn parse_json(
    raw: &str,
    origin: &str,
) -> Result<InteractionConfig, ConfigLoadError> {
    serde_json::from_str(raw).map_err(|err| ConfigLoadError::Parse {
        origin: origin.to_string(),
        reason: err.to_string(),
    })
}
