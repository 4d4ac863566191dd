use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Hugging Face inference API token (`hf_...`)
    #[serde(default)]
    pub hf_api_key: Option<String>,

    /// Hosted model identifier
    #[serde(default = "default_hf_model")]
    pub hf_model: String,

    /// Inference API base URL; the model id is appended
    #[serde(default = "default_hf_api_url")]
    pub hf_api_url: String,

    /// Path to the gift catalog CSV
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Timeout for one model call, in seconds
    #[serde(default = "default_llm_timeout_secs")]
    pub llm_timeout_secs: u64,

    #[serde(default = "default_llm_max_new_tokens")]
    pub llm_max_new_tokens: u32,

    #[serde(default = "default_llm_temperature")]
    pub llm_temperature: f32,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_hf_model() -> String {
    "google/flan-t5-large".to_string()
}

fn default_hf_api_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_catalog_path() -> String {
    "data/catalog.csv".to_string()
}

fn default_llm_timeout_secs() -> u64 {
    40
}

fn default_llm_max_new_tokens() -> u32 {
    200
}

fn default_llm_temperature() -> f32 {
    0.7
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Full inference endpoint for the configured model
    pub fn model_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.hf_api_url.trim_end_matches('/'),
            self.hf_model.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_env() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.hf_api_key, None);
        assert_eq!(config.hf_model, "google/flan-t5-large");
        assert_eq!(config.catalog_path, "data/catalog.csv");
        assert_eq!(config.llm_timeout_secs, 40);
        assert_eq!(config.llm_max_new_tokens, 200);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("HF_API_KEY".to_string(), "hf_abc".to_string()),
            ("HF_MODEL".to_string(), "org/model".to_string()),
            ("PORT".to_string(), "9001".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.hf_api_key.as_deref(), Some("hf_abc"));
        assert_eq!(config.port, 9001);
        assert_eq!(
            config.model_endpoint(),
            "https://api-inference.huggingface.co/models/org/model"
        );
    }
}
