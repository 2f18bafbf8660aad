use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the restaurant listings CSV dataset
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Path to the append-only feedback log CSV
    #[serde(default = "default_feedback_path")]
    pub feedback_path: String,

    /// Directory holding representative menu images
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_dataset_path() -> String {
    "data/restaurants.csv".to_string()
}

fn default_feedback_path() -> String {
    "feedback_log.csv".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
