use crate::config::InputSources;
use crate::utils::error::{CipherError, Result};
use crate::utils::validation::{validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    pub key: Option<String>,
    pub alphabet: Option<String>,
    pub plaintext: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub echo: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CipherError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CipherError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CIPHER_DIR})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CipherError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn sources(&self) -> InputSources {
        InputSources {
            key: self.input.key.clone(),
            alphabet: self.input.alphabet.clone(),
            plaintext: self.input.plaintext.clone(),
            output: self.output.path.clone(),
            echo: self.output.echo,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let paths = [
            ("input.key", &self.input.key),
            ("input.alphabet", &self.input.alphabet),
            ("input.plaintext", &self.input.plaintext),
            ("output.path", &self.output.path),
        ];
        for (field, value) in paths {
            if let Some(path) = value {
                validate_path(field, path)?;
            }
        }
        Ok(())
    }
}
