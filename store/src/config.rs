use serde::{Deserialize, Serialize};
use tracing::{Level, debug, error, instrument};

// the configuration document baked into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../portfolio.toml");

// portfolio configuration
//
// there is no filesystem in the browser, so unlike a server config this is read from
// the embedded document once at startup.  every field has a default so that a partial
// (or empty) document is still usable
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PortfolioConfig {
    // origin of the rest backend; empty means same-origin relative requests
    pub api_base: String,

    // namespace for every local storage key we own
    pub storage_prefix: String,

    pub theme_key: String,
    pub token_key: String,

    // read_time attached to every blog post created from the studio
    pub blog_read_time: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            api_base: String::new(),
            storage_prefix: String::from("portfolio_"),
            theme_key: String::from("theme"),
            token_key: String::from("token"),
            blog_read_time: 4,
        }
    }
}

impl PortfolioConfig {
    pub fn storage_key(&self, key: &str) -> String {
        format!("{}{}", self.storage_prefix, key)
    }

    pub fn theme_storage_key(&self) -> String {
        self.storage_key(&self.theme_key)
    }

    pub fn token_storage_key(&self) -> String {
        self.storage_key(&self.token_key)
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: PortfolioConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<PortfolioConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

// a broken document is logged and replaced by the defaults; the site still renders
#[instrument(level=Level::DEBUG)]
pub fn load_config() -> PortfolioConfig {
    let mut config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            error!("failed to parse embedded config, using defaults: {err}");
            PortfolioConfig::default()
        }
    };

    if let Some(base) = option_env!("PORTFOLIO_API_BASE") {
        config.api_base = base.to_owned();
    }

    debug!({ api_base = %config.api_base }, "loaded config");
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_parses() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();

        assert_eq!(config.theme_storage_key(), "portfolio_theme");
        assert_eq!(config.token_storage_key(), "portfolio_token");
        assert_eq!(config.blog_read_time, 4);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = parse_config("[config]\napi_base = \"https://api.example.dev\"\n").unwrap();

        assert_eq!(config.api_base, "https://api.example.dev");
        assert_eq!(config.storage_prefix, "portfolio_");
        assert_eq!(config.blog_read_time, 4);
    }

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(parse_config("").unwrap(), PortfolioConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse_config("[config\napi_base = ").is_err());
        assert!(parse_config("[config]\nblog_read_time = \"four\"\n").is_err());
    }
}
