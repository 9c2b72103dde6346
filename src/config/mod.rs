// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_yaml_config() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "endpoint:\n  url: http://127.0.0.1:9000/health\n  timeout_secs: 3\nview:\n  stale_responses: discard"
        )
        .unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.endpoint.url.as_str(), "http://127.0.0.1:9000/health");
        assert_eq!(config.endpoint.timeout_secs, Some(3));
        assert_eq!(config.view.stale_responses, StaleResponsePolicy::Discard);
    }

    #[tokio::test]
    async fn test_load_json_config_with_defaults() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{}}").unwrap();

        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.endpoint.url.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.view.stale_responses, StaleResponsePolicy::Apply);
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "endpoint:\n  timeout_secs: 0").unwrap();

        assert!(load_config(file.path()).await.is_err());
    }
}
