#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ProviderConfig;
use crate::utils::error::{Result, UploadError};
use crate::utils::validation::*;
use std::env;

pub use toml_config::TomlConfig;

impl ProviderConfig {
    /// Reads `SUPABASE_URL`, `SUPABASE_KEY` and `SUPABASE_BUCKET`, plus the
    /// optional `SUPABASE_DIRECTORY` and `SUPABASE_TIMEOUT_SECONDS`.
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            env::var(name).map_err(|_| UploadError::ConfigError {
                message: format!("{} environment variable is required", name),
            })
        };

        let timeout_seconds = match env::var("SUPABASE_TIMEOUT_SECONDS") {
            Ok(raw) => Some(raw.parse::<u64>().map_err(|e| {
                UploadError::InvalidConfigValueError {
                    field: "SUPABASE_TIMEOUT_SECONDS".to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            endpoint_url: required("SUPABASE_URL")?,
            api_key: required("SUPABASE_KEY")?,
            bucket_name: required("SUPABASE_BUCKET")?,
            path_prefix: env::var("SUPABASE_DIRECTORY").unwrap_or_default(),
            timeout_seconds,
        })
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_present("endpoint_url", &self.endpoint_url)?;
        validate_url("endpoint_url", &self.endpoint_url)?;
        validate_present("api_key", &self.api_key)?;
        validate_bucket_name("bucket_name", &self.bucket_name)?;
        validate_path_prefix("path_prefix", &self.path_prefix)?;

        if let Some(seconds) = self.timeout_seconds {
            validate_range("timeout_seconds", seconds, 1, 3600)?;
        }

        if !self.path_prefix.is_empty() && !self.path_prefix.ends_with('/') {
            tracing::warn!(
                "path_prefix '{}' has no trailing '/'; it will be glued onto folder names",
                self.path_prefix
            );
        }

        tracing::debug!("Provider configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ProviderConfig {
        ProviderConfig::new("https://example.supabase.co", "test-api-key", "test-bucket")
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid().validate().is_ok());
        assert!(valid().with_path_prefix("uploads/").validate().is_ok());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = valid();
        config.endpoint_url = "example.supabase.co".to_string();
        assert!(config.validate().is_err());

        let mut config = valid();
        config.api_key = String::new();
        assert!(matches!(
            config.validate(),
            Err(UploadError::MissingConfigError { .. })
        ));

        assert!(valid().with_path_prefix("/abs/").validate().is_err());
        assert!(valid().with_timeout_seconds(0).validate().is_err());
    }

    // Single test so the process-wide environment is not raced by a sibling.
    #[test]
    fn test_from_env() {
        for name in [
            "SUPABASE_URL",
            "SUPABASE_KEY",
            "SUPABASE_BUCKET",
            "SUPABASE_DIRECTORY",
            "SUPABASE_TIMEOUT_SECONDS",
        ] {
            env::remove_var(name);
        }
        assert!(ProviderConfig::from_env().is_err());

        env::set_var("SUPABASE_URL", "https://env.supabase.co");
        env::set_var("SUPABASE_KEY", "env-key");
        env::set_var("SUPABASE_BUCKET", "env-bucket");
        let config = ProviderConfig::from_env().unwrap();
        assert_eq!(config.endpoint_url, "https://env.supabase.co");
        assert_eq!(config.path_prefix, "");
        assert_eq!(config.timeout_seconds, None);

        env::set_var("SUPABASE_DIRECTORY", "cms/");
        env::set_var("SUPABASE_TIMEOUT_SECONDS", "15");
        let config = ProviderConfig::from_env().unwrap();
        assert_eq!(config.path_prefix, "cms/");
        assert_eq!(config.timeout_seconds, Some(15));

        env::set_var("SUPABASE_TIMEOUT_SECONDS", "soon");
        assert!(matches!(
            ProviderConfig::from_env(),
            Err(UploadError::InvalidConfigValueError { .. })
        ));

        for name in [
            "SUPABASE_URL",
            "SUPABASE_KEY",
            "SUPABASE_BUCKET",
            "SUPABASE_DIRECTORY",
            "SUPABASE_TIMEOUT_SECONDS",
        ] {
            env::remove_var(name);
        }
    }
}
