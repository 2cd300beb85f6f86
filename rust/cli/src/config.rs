use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_ENV: &str = "HANDEVAL_CONFIG";
pub const FORMAT_ENV: &str = "HANDEVAL_FORMAT";
pub const PROMPT_ENV: &str = "HANDEVAL_PROMPT";

/// How the `eval` command renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    /// Ask for missing cards on stdin when fewer than five are given.
    pub prompt: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub format: ValueSource,
    pub prompt: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            format: ValueSource::Default,
            prompt: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            prompt: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `HANDEVAL_CONFIG`, then individual environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
        if let Some(v) = f.prompt {
            cfg.prompt = v;
            sources.prompt = ValueSource::File;
        }
    }

    if let Ok(format) = std::env::var(FORMAT_ENV)
        && !format.is_empty()
    {
        cfg.format = OutputFormat::parse(&format)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid format: {}", format)))?;
        sources.format = ValueSource::Env;
    }
    if let Ok(prompt) = std::env::var(PROMPT_ENV)
        && !prompt.is_empty()
    {
        cfg.prompt =
            parse_bool(&prompt).ok_or_else(|| ConfigError::Invalid("Invalid prompt".into()))?;
        sources.prompt = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    format: Option<OutputFormat>,
    #[serde(default)]
    prompt: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn output_format_parse_is_case_insensitive() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::parse("yaml"), None);
    }

    #[test]
    fn file_config_fields_are_optional() {
        let f: FileConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(f.format, Some(OutputFormat::Json));
        assert_eq!(f.prompt, None);
    }
}
