//! Configuration system for polldash.
//!
//! Layered hierarchy, later layers override earlier ones:
//!
//! 1. **Built-in defaults** — [`schema::PolldashConfig::default()`]
//! 2. **User global config** — `~/.polldash/config.toml`
//! 3. **Project local config** — `.polldash.toml` in the working directory
//! 4. **Environment variables** — `POLLDASH_*` (highest precedence)
//!
//! Malformed or missing files fall back to the previous layer. CLI flags
//! are applied on top by `main`, outside this module.

pub mod schema;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub use schema::PolldashConfig;

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Load the fully resolved configuration.
///
/// Merges defaults → global TOML → project TOML → env vars. Entry point
/// for every module that needs configuration.
pub fn load() -> PolldashConfig {
    let mut config = PolldashConfig::default();

    if let Some(global) = load_toml_file(global_config_path()) {
        config = global;
    }

    if let Some(project) = load_toml_file(project_config_path()) {
        config = project;
    }

    apply_env_overrides(&mut config);

    config
}

/// Load a TOML config file if it exists and parses.
///
/// Returns `None` on a missing path, unreadable file, or malformed
/// content; the dashboard must come up even with a broken config file.
fn load_toml_file(path: Option<PathBuf>) -> Option<PolldashConfig> {
    let path = path?;
    let content = fs::read_to_string(&path).ok()?;
    toml::from_str(&content).ok()
}

// ---------------------------------------------------------------------------
// File paths
// ---------------------------------------------------------------------------

/// Path to the user global config: `~/.polldash/config.toml`.
fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".polldash").join("config.toml"))
}

/// Path to the project local config: `.polldash.toml` in the current directory.
fn project_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|cwd| cwd.join(".polldash.toml"))
}

/// Global config path for display and health reporting.
pub fn global_config_file() -> Option<PathBuf> {
    global_config_path()
}

// ---------------------------------------------------------------------------
// Environment variable overrides
// ---------------------------------------------------------------------------

/// Apply `POLLDASH_*` environment overrides.
fn apply_env_overrides(config: &mut PolldashConfig) {
    if let Ok(val) = std::env::var("POLLDASH_HOST")
        && !val.is_empty()
    {
        config.server.host = val;
    }
    if let Ok(val) = std::env::var("POLLDASH_PORT")
        && let Ok(port) = val.parse::<u16>()
    {
        config.server.port = port;
    }
    if let Ok(val) = std::env::var("POLLDASH_CHART_DIR")
        && !val.is_empty()
    {
        config.charts.dir = val;
    }
    if let Ok(val) = std::env::var("POLLDASH_OPEN_BROWSER") {
        config.server.open_browser = is_truthy(&val);
    }
}

/// Check if a string value represents a truthy boolean.
fn is_truthy(val: &str) -> bool {
    matches!(
        val.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

// ---------------------------------------------------------------------------
// Config init / set / reset
// ---------------------------------------------------------------------------

/// Write the default annotated config to `~/.polldash/config.toml`.
///
/// Creates the directory if needed. Errors if the file already exists
/// unless `force` is set.
pub fn init_config(force: bool) -> Result<PathBuf> {
    let path = global_config_path().context("could not determine home directory")?;

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create ~/.polldash/ directory")?;
    }

    fs::write(&path, PolldashConfig::default_toml()).context("failed to write config file")?;

    Ok(path)
}

/// Set a single dotted key (e.g. `server.port`) in the global config file.
///
/// Creates the file from defaults first if it does not exist.
pub fn set_config_value(key: &str, value: &str) -> Result<()> {
    let path = global_config_path().context("could not determine home directory")?;

    let content = if path.exists() {
        fs::read_to_string(&path).context("failed to read config file")?
    } else {
        toml::to_string_pretty(&PolldashConfig::default())
            .context("failed to serialize default config")?
    };

    let mut root: toml::Value =
        toml::from_str(&content).context("failed to parse config as TOML")?;

    set_toml_value(&mut root, key, value)?;

    // Reject edits that would leave the config unloadable.
    let output = toml::to_string_pretty(&root).context("failed to serialize config")?;
    let _: PolldashConfig =
        toml::from_str(&output).with_context(|| format!("'{value}' is not valid for '{key}'"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }
    fs::write(&path, output).context("failed to write config file")?;

    Ok(())
}

/// Set a value in a TOML value tree using a dotted key path.
///
/// Parses the raw string according to the existing value's type so
/// `server.port = "9000"` lands as an integer, not a string.
fn set_toml_value(root: &mut toml::Value, key: &str, raw_value: &str) -> Result<()> {
    let Some((section, leaf)) = key.split_once('.') else {
        anyhow::bail!("config key must be section.field, got '{key}'");
    };

    let table = root
        .get_mut(section)
        .and_then(|v| v.as_table_mut())
        .with_context(|| format!("config section not found: '{section}'"))?;

    let new_value = match table.get(leaf) {
        Some(toml::Value::Boolean(_)) => toml::Value::Boolean(is_truthy(raw_value)),
        Some(toml::Value::Integer(_)) => {
            let n: i64 = raw_value
                .parse()
                .with_context(|| format!("expected integer for '{key}', got '{raw_value}'"))?;
            toml::Value::Integer(n)
        }
        Some(toml::Value::String(_)) => toml::Value::String(raw_value.to_string()),
        Some(_) => anyhow::bail!("unsupported value type at '{key}'"),
        None => anyhow::bail!("config key not found: '{key}'"),
    };

    table.insert(leaf.to_string(), new_value);
    Ok(())
}

/// Reset the global config to defaults (overwrite the file).
pub fn reset_config() -> Result<PathBuf> {
    init_config(true)
}

/// Effective (fully resolved) config as pretty TOML.
pub fn show_effective_config() -> Result<String> {
    let config = load();
    toml::to_string_pretty(&config).context("failed to serialize effective config")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
