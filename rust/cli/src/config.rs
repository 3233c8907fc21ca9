//! Layered configuration: built-in defaults, an optional TOML file named by
//! `HANABI_CONFIG`, then `HANABI_*` environment variables.

use hanabi_engine::rules::{Rules, DEFAULT_DROP_RESERVE, DEFAULT_HAND_SIZE, MAX_HAND_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::cli::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub hand_size: usize,
    pub drop_reserve: usize,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub hand_size: ValueSource,
    pub drop_reserve: ValueSource,
    pub seed: ValueSource,
    pub format: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            hand_size: ValueSource::Default,
            drop_reserve: ValueSource::Default,
            seed: ValueSource::Default,
            format: ValueSource::Default,
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
            hand_size: DEFAULT_HAND_SIZE,
            drop_reserve: DEFAULT_DROP_RESERVE,
            seed: None,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            hand_size: self.hand_size,
            drop_reserve: self.drop_reserve,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HANABI_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.hand_size {
            cfg.hand_size = v;
            sources.hand_size = ValueSource::File;
        }
        if let Some(v) = f.drop_reserve {
            cfg.drop_reserve = v;
            sources.drop_reserve = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.format {
            cfg.format = v;
            sources.format = ValueSource::File;
        }
    }

    if let Ok(size) = std::env::var("HANABI_HAND_SIZE")
        && !size.is_empty()
    {
        cfg.hand_size = size
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid hand size".into()))?;
        sources.hand_size = ValueSource::Env;
    }
    if let Ok(reserve) = std::env::var("HANABI_DROP_RESERVE")
        && !reserve.is_empty()
    {
        cfg.drop_reserve = reserve
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid drop reserve".into()))?;
        sources.drop_reserve = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("HANABI_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(fmt) = std::env::var("HANABI_FORMAT")
        && !fmt.is_empty()
    {
        cfg.format = parse_format(&fmt)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid format: {}", fmt)))?;
        sources.format = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    hand_size: Option<usize>,
    #[serde(default)]
    drop_reserve: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.hand_size == 0 || cfg.hand_size > MAX_HAND_SIZE {
        return Err(ConfigError::Invalid(format!(
            "hand_size must be between 1 and {}",
            MAX_HAND_SIZE
        )));
    }
    if cfg.drop_reserve == 0 {
        return Err(ConfigError::Invalid(
            "drop_reserve must be >=1".into(),
        ));
    }
    Ok(())
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s.to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "jsonl" => Some(OutputFormat::Jsonl),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_rules() {
        let cfg = Config::default();
        assert_eq!(cfg.rules(), Rules::default());
        assert_eq!(cfg.format, OutputFormat::Text);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn validate_rejects_oversized_hand() {
        let cfg = Config {
            hand_size: MAX_HAND_SIZE + 1,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
        let cfg = Config {
            hand_size: MAX_HAND_SIZE,
            ..Config::default()
        };
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn validate_rejects_zero_values() {
        let cfg = Config {
            hand_size: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
        let cfg = Config {
            drop_reserve: 0,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(parse_format("JSONL"), Some(OutputFormat::Jsonl));
        assert_eq!(parse_format("text"), Some(OutputFormat::Text));
        assert_eq!(parse_format("csv"), None);
    }

    #[test]
    fn file_config_reads_partial_toml() {
        let f: FileConfig = toml::from_str("hand_size = 4\nformat = \"jsonl\"\n").unwrap();
        assert_eq!(f.hand_size, Some(4));
        assert_eq!(f.format, Some(OutputFormat::Jsonl));
        assert!(f.seed.is_none());
    }
}
