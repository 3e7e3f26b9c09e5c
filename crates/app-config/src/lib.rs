use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, Settings};

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Built-in defaults (50/200 windows, info logging).
/// 2. A `config/base.toml` file, if present.
/// 3. An environment-specific file (e.g. `config/development.toml`).
/// 4. Environment variables (e.g. `APP_BACKTEST__FAST_WINDOW=20`).
///
/// Window validation runs here so a bad combination fails at startup, before
/// any data is read.
pub fn load_settings() -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .set_default("app.log_level", "info")?
        .set_default("backtest.fast_window", 50)?
        .set_default("backtest.slow_window", 200)?
        .add_source(File::with_name("config/base").required(false))
        .add_source(File::with_name(&format!("config/{environment}")).required(false))
        // The prefix is `APP`, separator is `__`.
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.backtest.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_deserialize_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [app]
            log_level = "debug"

            [backtest]
            fast_window = 20
            slow_window = 100
            minimum_rows = 120
            "#,
        )
        .unwrap();

        assert_eq!(settings.app.log_level, "debug");
        assert_eq!(settings.backtest.fast_window, 20);
        assert_eq!(settings.backtest.slow_window, 100);
        assert_eq!(settings.backtest.minimum_rows, Some(120));
    }

    #[test]
    fn the_backtest_section_is_optional() {
        let settings: Settings = toml::from_str(
            r#"
            [app]
            log_level = "info"
            "#,
        )
        .unwrap();

        assert_eq!(settings.backtest.fast_window, 50);
        assert_eq!(settings.backtest.slow_window, 200);
        assert_eq!(settings.backtest.minimum_rows, None);
    }
}
