use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::locale::LocaleSetting;
use tarot_engine::cards::DECK_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub locale: LocaleSetting,
    pub font_path: PathBuf,
    pub asset_root: PathBuf,
    pub artwork_ext: String,
    pub default_count: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub locale: ValueSource,
    pub font_path: ValueSource,
    pub asset_root: ValueSource,
    pub artwork_ext: ValueSource,
    pub default_count: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            locale: ValueSource::Default,
            font_path: ValueSource::Default,
            asset_root: ValueSource::Default,
            artwork_ext: ValueSource::Default,
            default_count: ValueSource::Default,
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
            seed: None,
            locale: LocaleSetting::Auto,
            font_path: PathBuf::from("FONT_CH.ttf"),
            asset_root: PathBuf::from("Tarot"),
            artwork_ext: "jpeg".into(),
            default_count: 1,
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

/// Defaults, then the TOML file named by `TAROT_CONFIG`, then `TAROT_*`
/// environment variables. Command-line flags are applied by the caller.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("TAROT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.locale {
            cfg.locale = v;
            sources.locale = ValueSource::File;
        }
        if let Some(v) = f.font_path {
            cfg.font_path = v;
            sources.font_path = ValueSource::File;
        }
        if let Some(v) = f.asset_root {
            cfg.asset_root = v;
            sources.asset_root = ValueSource::File;
        }
        if let Some(v) = f.artwork_ext {
            cfg.artwork_ext = v;
            sources.artwork_ext = ValueSource::File;
        }
        if let Some(v) = f.default_count {
            cfg.default_count = v;
            sources.default_count = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("TAROT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(locale) = std::env::var("TAROT_LOCALE")
        && !locale.is_empty()
    {
        cfg.locale = LocaleSetting::parse(&locale)
            .ok_or_else(|| ConfigError::Invalid("Invalid locale".into()))?;
        sources.locale = ValueSource::Env;
    }
    if let Ok(font) = std::env::var("TAROT_FONT")
        && !font.is_empty()
    {
        cfg.font_path = PathBuf::from(font);
        sources.font_path = ValueSource::Env;
    }
    if let Ok(root) = std::env::var("TAROT_ASSET_ROOT")
        && !root.is_empty()
    {
        cfg.asset_root = PathBuf::from(root);
        sources.asset_root = ValueSource::Env;
    }
    if let Ok(ext) = std::env::var("TAROT_ARTWORK_EXT")
        && !ext.is_empty()
    {
        cfg.artwork_ext = ext;
        sources.artwork_ext = ValueSource::Env;
    }
    if let Ok(count) = std::env::var("TAROT_COUNT")
        && !count.is_empty()
    {
        cfg.default_count = count
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid count".into()))?;
        sources.default_count = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    locale: Option<LocaleSetting>,
    #[serde(default)]
    font_path: Option<PathBuf>,
    #[serde(default)]
    asset_root: Option<PathBuf>,
    #[serde(default)]
    artwork_ext: Option<String>,
    #[serde(default)]
    default_count: Option<i64>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(1..=DECK_SIZE as i64).contains(&cfg.default_count) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: default_count must be between 1 and {}",
            DECK_SIZE
        )));
    }
    if cfg.artwork_ext.is_empty() || cfg.artwork_ext.starts_with('.') {
        return Err(ConfigError::Invalid(
            "Invalid configuration: artwork_ext must be non-empty and without a leading dot"
                .into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn count_outside_deck_is_invalid() {
        for n in [0, 79] {
            let cfg = Config {
                default_count: n,
                ..Config::default()
            };
            assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn dotted_extension_is_invalid() {
        let cfg = Config {
            artwork_ext: ".jpeg".into(),
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn file_config_accepts_partial_tables() {
        let f: FileConfig = toml::from_str("locale = \"zh\"\nseed = 9\n").unwrap();
        assert_eq!(f.locale, Some(LocaleSetting::Zh));
        assert_eq!(f.seed, Some(9));
        assert!(f.asset_root.is_none());
    }
}
