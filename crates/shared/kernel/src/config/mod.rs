use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment overrides, e.g. `APB__CATALOG__SNAPSHOT`.
pub const ENV_PREFIX: &str = "APB";

/// Custom error type for config loading.
#[apb_derive::apb_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering a file with environment overrides.
///
/// 1. **Base File**: when `path` is given, the file is required and its format is
///    inferred from the extension (`appueblear.toml`, `appueblear.json`, ...). Without a
///    path, every field keeps its `serde` default.
/// 2. **Environment Overrides**: variables prefixed with `APB__`, nested with `__`
///    (`APB__CATALOG__PROJECT_ID` maps to `catalog.project_id`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or unreadable, or if the merged
/// values do not match the shape of `T`.
///
/// # Example
/// ```rust
/// use apb_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = &path {
        let path: &Path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    } else {
        info!("No config file given, using defaults and {ENV_PREFIX}__ overrides");
    }

    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
