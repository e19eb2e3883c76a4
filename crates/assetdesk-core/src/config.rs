//! Session configuration.
//!
//! Settings come from an optional project file, an optional user file, and
//! one environment override. Every key has a default, so no file is needed.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::ids::IdScheme;

/// Environment variable overriding `dashboard.recent_activity_limit`.
pub const RECENT_LIMIT_ENV: &str = "ASSETDESK_RECENT_LIMIT";

/// Effective settings for one tracker session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub ids: IdConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub session: SessionOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdConfig {
    #[serde(default)]
    pub scheme: IdScheme,
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,
    #[serde(default = "default_ticket_prefix")]
    pub ticket_prefix: String,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            scheme: IdScheme::default(),
            asset_prefix: default_asset_prefix(),
            ticket_prefix: default_ticket_prefix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: default_recent_activity_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Start the store from the demo fixture instead of empty collections.
    #[serde(default)]
    pub seed_demo_data: bool,
}

/// One config file as written: sections it omits stay `None` so a lower
/// layer can fill them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub ids: Option<IdConfig>,
    #[serde(default)]
    pub dashboard: Option<DashboardConfig>,
    #[serde(default)]
    pub session: Option<SessionOptions>,
}

/// Read `<project_root>/.assetdesk/config.toml`. A missing file is an empty layer.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_project_config(project_root: &Path) -> Result<ConfigLayer> {
    load_layer(&project_root.join(".assetdesk/config.toml"))
}

/// Read the per-user config file under the platform config directory.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<ConfigLayer> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(ConfigLayer::default());
    };
    load_user_config_in(&config_dir)
}

/// Read `<config_dir>/assetdesk/config.toml`. A missing file is an empty layer.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_user_config_in(config_dir: &Path) -> Result<ConfigLayer> {
    load_layer(&config_dir.join("assetdesk/config.toml"))
}

fn load_layer(path: &Path) -> Result<ConfigLayer> {
    if !path.exists() {
        return Ok(ConfigLayer::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ConfigLayer>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Resolve project file, user file, and environment into one config.
///
/// # Errors
///
/// Returns an error if either config file exists but is malformed.
pub fn resolve_config(project_root: &Path) -> Result<SessionConfig> {
    let env_limit = env::var(RECENT_LIMIT_ENV).ok();
    resolve_config_in(
        project_root,
        dirs::config_dir().as_deref(),
        env_limit.as_deref(),
    )
}

/// [`resolve_config`] with the user config directory and the environment
/// override passed in rather than looked up.
///
/// # Errors
///
/// Returns an error if either config file exists but is malformed.
pub fn resolve_config_in(
    project_root: &Path,
    user_config_dir: Option<&Path>,
    env_recent_limit: Option<&str>,
) -> Result<SessionConfig> {
    let project = load_project_config(project_root)?;
    let user = match user_config_dir {
        Some(dir) => load_user_config_in(dir)?,
        None => ConfigLayer::default(),
    };
    Ok(merge_layers(project, user, env_recent_limit))
}

/// Project sections win over user sections; the environment wins over both
/// for the recent-activity limit. An unparsable override is ignored.
#[must_use]
pub fn merge_layers(
    project: ConfigLayer,
    user: ConfigLayer,
    env_recent_limit: Option<&str>,
) -> SessionConfig {
    let mut dashboard = project.dashboard.or(user.dashboard).unwrap_or_default();

    if let Some(raw) = env_recent_limit {
        match raw.trim().parse::<usize>() {
            Ok(limit) => dashboard.recent_activity_limit = limit,
            Err(_) => tracing::warn!(
                value = raw,
                "ignoring {RECENT_LIMIT_ENV}: not a non-negative integer"
            ),
        }
    }

    SessionConfig {
        ids: project.ids.or(user.ids).unwrap_or_default(),
        dashboard,
        session: project.session.or(user.session).unwrap_or_default(),
    }
}

fn default_asset_prefix() -> String {
    "A-".to_string()
}

fn default_ticket_prefix() -> String {
    "T-".to_string()
}

const fn default_recent_activity_limit() -> usize {
    5
}
