pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "encryption.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "vigenere-cli")]
#[command(about = "Encrypts a plaintext file with a Vigenère cipher over a custom alphabet")]
pub struct CliConfig {
    /// File which contains the key phrase
    #[arg(short = 'k', long = "key", value_name = "FILE")]
    pub key: Option<String>,

    /// File which contains the alphabet for encryption
    #[arg(short = 'a', long = "alphabet", value_name = "FILE")]
    pub alphabet: Option<String>,

    /// File which contains the plaintext
    #[arg(short = 't', long = "text", value_name = "FILE")]
    pub text: Option<String>,

    /// Where to write the ciphertext [default: encryption.txt]
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<String>,

    /// TOML configuration file; flags given on the command line take precedence
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Do not echo the inputs and the ciphertext on stdout
    #[arg(short, long)]
    pub quiet: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列參數與 TOML 配置，命令列優先
    pub fn resolve(&self) -> Result<RunConfig> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                let config = toml_config::TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };
        let file_config = file_config.as_ref();

        let run_config = RunConfig::from_sources(
            InputSources {
                key: self.key.clone(),
                alphabet: self.alphabet.clone(),
                plaintext: self.text.clone(),
                output: self.output.clone(),
                echo: if self.quiet { Some(false) } else { None },
            },
            file_config,
        )?;
        run_config.validate()?;
        Ok(run_config)
    }
}

/// Values that may or may not have been supplied by one configuration layer.
#[derive(Debug, Clone, Default)]
pub struct InputSources {
    pub key: Option<String>,
    pub alphabet: Option<String>,
    pub plaintext: Option<String>,
    pub output: Option<String>,
    pub echo: Option<bool>,
}

/// Fully resolved settings for one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub key_path: String,
    pub alphabet_path: String,
    pub plaintext_path: String,
    pub output_path: String,
    pub echo: bool,
}

impl RunConfig {
    pub fn new(key_path: &str, alphabet_path: &str, plaintext_path: &str) -> Self {
        Self {
            key_path: key_path.to_string(),
            alphabet_path: alphabet_path.to_string(),
            plaintext_path: plaintext_path.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            echo: true,
        }
    }

    pub fn with_output_path(mut self, output_path: &str) -> Self {
        self.output_path = output_path.to_string();
        self
    }

    /// Explicit values win over the file; the file wins over defaults.
    pub fn from_sources(
        explicit: InputSources,
        file: Option<&toml_config::TomlConfig>,
    ) -> Result<Self> {
        let from_file = file.map(|c| c.sources()).unwrap_or_default();

        let key = explicit.key.or(from_file.key);
        let alphabet = explicit.alphabet.or(from_file.alphabet);
        let plaintext = explicit.plaintext.or(from_file.plaintext);

        let key_path = crate::utils::validation::validate_required_field("key file (-k)", &key)?;
        let alphabet_path =
            crate::utils::validation::validate_required_field("alphabet file (-a)", &alphabet)?;
        let plaintext_path =
            crate::utils::validation::validate_required_field("plaintext file (-t)", &plaintext)?;

        Ok(Self {
            key_path: key_path.clone(),
            alphabet_path: alphabet_path.clone(),
            plaintext_path: plaintext_path.clone(),
            output_path: explicit
                .output
                .or(from_file.output)
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
            echo: explicit.echo.or(from_file.echo).unwrap_or(true),
        })
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("key file", &self.key_path)?;
        validate_path("alphabet file", &self.alphabet_path)?;
        validate_path("plaintext file", &self.plaintext_path)?;
        validate_path("output file", &self.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn key_path(&self) -> &str {
        &self.key_path
    }

    fn alphabet_path(&self) -> &str {
        &self.alphabet_path
    }

    fn plaintext_path(&self) -> &str {
        &self.plaintext_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn echo_enabled(&self) -> bool {
        self.echo
    }
}

#[cfg(test)]
mod tests {
    use super::toml_config::TomlConfig;
    use super::*;
    use crate::utils::error::CipherError;

    fn explicit(key: Option<&str>, alphabet: Option<&str>, plaintext: Option<&str>) -> InputSources {
        InputSources {
            key: key.map(str::to_string),
            alphabet: alphabet.map(str::to_string),
            plaintext: plaintext.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            RunConfig::from_sources(explicit(Some("k"), Some("a"), Some("t")), None).unwrap();
        assert_eq!(config, RunConfig::new("k", "a", "t"));
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
        assert!(config.echo);
    }

    #[test]
    fn test_missing_input_path() {
        match RunConfig::from_sources(explicit(Some("k"), None, Some("t")), None) {
            Err(CipherError::MissingConfigError { field }) => {
                assert!(field.contains("alphabet"))
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_explicit_values_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[input]
key = "file-key.txt"
alphabet = "file-alphabet.txt"
plaintext = "file-plain.txt"

[output]
path = "file-out.txt"
echo = false
"#,
        )
        .unwrap();

        let mut sources = explicit(Some("cli-key.txt"), None, None);
        sources.output = Some("cli-out.txt".to_string());
        let config = RunConfig::from_sources(sources, Some(&file)).unwrap();

        assert_eq!(config.key_path, "cli-key.txt");
        assert_eq!(config.alphabet_path, "file-alphabet.txt");
        assert_eq!(config.plaintext_path, "file-plain.txt");
        assert_eq!(config.output_path, "cli-out.txt");
        assert!(!config.echo);
    }

    #[test]
    fn test_run_config_validation() {
        assert!(RunConfig::new("k", "a", "t").validate().is_ok());
        assert!(RunConfig::new("k", "", "t").validate().is_err());
        assert!(RunConfig::new("k", "a", "t")
            .with_output_path("")
            .validate()
            .is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_short_flags() {
        let cli = CliConfig::try_parse_from([
            "vigenere-cli",
            "-k",
            "key.txt",
            "-a",
            "alphabet.txt",
            "-t",
            "plain.txt",
            "-q",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.key_path, "key.txt");
        assert_eq!(config.alphabet_path, "alphabet.txt");
        assert_eq!(config.plaintext_path, "plain.txt");
        assert_eq!(config.output_path, DEFAULT_OUTPUT_PATH);
        assert!(!config.echo);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(CliConfig::try_parse_from(["vigenere-cli", "-x", "file"]).is_err());
    }
}
