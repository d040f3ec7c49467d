use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_MODEL_FILE: &str = "model_file.yaml";
const DEFAULT_PROPERTIES_FILE: &str = "model_properties_file.yaml";
const DEFAULT_DICTIONARY_FILE: &str = "data_dictionary.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub model_file: PathBuf,
    pub properties_file: PathBuf,
    pub dictionary_file: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        Ok(Config {
            model_file: env_path("MDF_MODEL_FILE", DEFAULT_MODEL_FILE),
            properties_file: env_path("MDF_PROPERTIES_FILE", DEFAULT_PROPERTIES_FILE),
            dictionary_file: env_path("MDF_DICTIONARY_FILE", DEFAULT_DICTIONARY_FILE),
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
