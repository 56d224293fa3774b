use config::{Case, Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `ZOO__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "ZOO";
/// File looked up (with any supported extension) when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

/// Custom error type for config loading.
#[zoo_derive::zoo_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest precedence first:
/// 1. **Base File**: `path` when given (must exist), otherwise an optional `server.*` file in
///    the working directory.
/// 2. **Environment Overrides**: variables prefixed with `ZOO__`, nested keys separated by
///    double underscores (`ZOO__SERVER__PORT` maps to `server.port`).
///
/// Anything neither layer sets falls back to the `serde(default)` of `T`.
///
/// # Errors
/// * An explicitly given file is missing or unreadable.
/// * The merged values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use zoo_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    info!(path = %effective_path.display(), required, "Loading config");

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(Case::Snake)
                .try_parsing(true),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
