use serde::Deserialize;

use crate::models::sizing::{SizingAssumptions, SizingInputs};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Engineering assumptions behind every recommendation. Omitted
    /// fields fall back to the normative defaults.
    #[serde(default)]
    pub assumptions: SizingAssumptions,
    /// Initial values for the sizing form.
    #[serde(default)]
    pub defaults: SizingInputs,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}
