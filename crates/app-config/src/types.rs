use indicators::MaCrossSettings;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    pub app: AppSettings,
    /// Window configuration for the crossover simulation.
    #[serde(default)]
    pub backtest: MaCrossSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The log level for the application.
    pub log_level: String,
}
