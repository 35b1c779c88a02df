use crate::domain::model::ProviderConfig;
use crate::utils::error::{Result, UploadError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk layout:
///
/// ```toml
/// [provider]
/// endpoint_url = "${SUPABASE_URL}"
/// api_key = "${SUPABASE_KEY}"
/// bucket_name = "media"
/// path_prefix = "uploads/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub provider: ProviderConfig,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| UploadError::ConfigError {
            message: format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UploadError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${SUPABASE_KEY})。未設定的變數保持原樣。
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UploadError::ConfigError {
        message: format!("Invalid placeholder pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
