use crate::utils::error::{Result, UtilsError};
use crate::utils::validation::{validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CHUNK_SIZE: i64 = 2;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtilsConfig {
    #[serde(default)]
    pub chunk: ChunkConfig,
    #[serde(default)]
    pub timing: TimingSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkConfig {
    /// Used when no size is given on the command line
    #[serde(default = "default_chunk_size")]
    pub default_size: i64,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Time every operation, not just `time` invocations
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

impl UtilsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UtilsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UtilsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHUNK_SIZE})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UtilsError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for UtilsConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("chunk.default_size", self.chunk.default_size, 1)
    }
}
