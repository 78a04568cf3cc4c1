// Configuration loader
// Defaults, then ~/.wren/config.toml, then WREN_* process environment
// variables. Later layers win.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{Env, EnvValue, AUTO_SUGGEST, HISTORY_FILE, HISTORY_SIZE, MOUSE_SUPPORT, STYLE_OVERRIDES};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, serde::Deserialize)]
struct TomlConfig {
    history_file: Option<PathBuf>,
    history_size: Option<i64>,
    mouse_support: Option<bool>,
    auto_suggest: Option<bool>,
    #[serde(default)]
    styles: HashMap<String, String>,
}

/// Builds the session environment: defaults, the user's config file if one
/// exists, then `WREN_*` process environment variables.
pub fn load_env() -> Result<Arc<Env>> {
    let config_path = dirs::home_dir().map(|home| home.join(".wren").join("config.toml"));
    load_env_from(config_path.as_deref())
}

pub fn load_env_from(config_path: Option<&Path>) -> Result<Arc<Env>> {
    let env = Env::with_defaults();
    if let Some(path) = config_path {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            let parsed = parse_config(&contents, path)?;
            apply_toml(&env, parsed);
        }
    }
    overlay_process_env(&env);
    Ok(Arc::new(env))
}

fn parse_config(contents: &str, path: &Path) -> Result<TomlConfig> {
    toml::from_str(contents)
        .map_err(|source| {
            ConfigError::Parse {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
}

fn apply_toml(env: &Env, cfg: TomlConfig) {
    if let Some(file) = cfg.history_file {
        env.set(
            HISTORY_FILE,
            EnvValue::Str(file.to_string_lossy().into_owned()),
        );
    }
    if let Some(size) = cfg.history_size {
        env.set(HISTORY_SIZE, EnvValue::Int(size));
    }
    if let Some(mouse) = cfg.mouse_support {
        env.set(MOUSE_SUPPORT, EnvValue::Bool(mouse));
    }
    if let Some(suggest) = cfg.auto_suggest {
        env.set(AUTO_SUGGEST, EnvValue::Bool(suggest));
    }
    if !cfg.styles.is_empty() {
        env.set(STYLE_OVERRIDES, EnvValue::Map(cfg.styles));
    }
}

fn overlay_process_env(env: &Env) {
    if let Ok(file) = std::env::var("WREN_HISTORY_FILE") {
        if !file.is_empty() {
            env.set(HISTORY_FILE, EnvValue::Str(file));
        }
    }
    if let Ok(size) = std::env::var("WREN_HISTORY_SIZE") {
        if let Ok(n) = size.parse::<i64>() {
            env.set(HISTORY_SIZE, EnvValue::Int(n));
        } else {
            tracing::warn!("ignoring non-numeric WREN_HISTORY_SIZE={size}");
        }
    }
    if let Some(mouse) = parse_env_bool("WREN_MOUSE_SUPPORT") {
        env.set(MOUSE_SUPPORT, EnvValue::Bool(mouse));
    }
    if let Some(suggest) = parse_env_bool("WREN_AUTO_SUGGEST") {
        env.set(AUTO_SUGGEST, EnvValue::Bool(suggest));
    }
}

fn parse_env_bool(name: &str) -> Option<bool> {
    match std::env::var(name).ok()?.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
