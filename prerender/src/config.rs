use std::path::PathBuf;
use thiserror::Error;
use url::Url;

pub const OUT_DIR_VAR: &str = "PRERENDER_OUT_DIR";
pub const SITE_ORIGIN_VAR: &str = "SITE_ORIGIN";
pub const DEFAULT_OUT_DIR: &str = "dist";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PRERENDER_OUT_DIR must not be empty")]
    EmptyOutDir,
    #[error("SITE_ORIGIN is not a valid URL: {0}")]
    InvalidOrigin(String),
    #[error("SITE_ORIGIN must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("SITE_ORIGIN must be a bare origin without path, query or fragment, got {0}")]
    NotAnOrigin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub out_dir: PathBuf,
    /// Public origin without trailing slash, used for canonical and hreflang links.
    pub site_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let out_dir = match lookup(OUT_DIR_VAR) {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyOutDir),
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_OUT_DIR),
        };

        let site_origin = match lookup(SITE_ORIGIN_VAR) {
            Some(origin) if !origin.trim().is_empty() => Some(parse_origin(origin.trim())?),
            _ => None,
        };

        Ok(Self { out_dir, site_origin })
    }

    /// First command line argument wins over the environment.
    pub fn with_out_dir_override(mut self, out_dir: Option<String>) -> Result<Self, ConfigError> {
        match out_dir {
            Some(dir) if dir.trim().is_empty() => return Err(ConfigError::EmptyOutDir),
            Some(dir) => self.out_dir = PathBuf::from(dir),
            None => {}
        }
        Ok(self)
    }
}

fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidOrigin(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
    if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
        return Err(ConfigError::NotAnOrigin(raw.to_string()));
    }
    Ok(url.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("dist"));
        assert_eq!(config.site_origin, None);
    }

    #[test]
    fn origin_loses_trailing_slash() {
        let config = config_from(&[(SITE_ORIGIN_VAR, "https://d56.de/")]).unwrap();
        assert_eq!(config.site_origin.as_deref(), Some("https://d56.de"));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(config_from(&[(OUT_DIR_VAR, "  ")]), Err(ConfigError::EmptyOutDir));
        assert!(matches!(
            config_from(&[(SITE_ORIGIN_VAR, "d56.de")]),
            Err(ConfigError::InvalidOrigin(_))
        ));
        assert_eq!(
            config_from(&[(SITE_ORIGIN_VAR, "ftp://d56.de")]),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn origin_is_reduced_to_scheme_host_and_port() {
        let config = config_from(&[(SITE_ORIGIN_VAR, "HTTPS://D56.de:8443")]).unwrap();
        assert_eq!(config.site_origin.as_deref(), Some("https://d56.de:8443"));
    }

    #[test]
    fn origin_with_path_query_or_fragment_is_rejected() {
        for raw in [
            "https://d56.de/x?a=1",
            "https://d56.de/x?a=1\"onload=\"x",
            "https://d56.de/?a=1",
            "https://d56.de/#top",
            "https://d56.de/en",
        ] {
            assert_eq!(
                config_from(&[(SITE_ORIGIN_VAR, raw)]),
                Err(ConfigError::NotAnOrigin(raw.to_string())),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn argument_overrides_environment() {
        let config = config_from(&[(OUT_DIR_VAR, "from-env")])
            .unwrap()
            .with_out_dir_override(Some("from-arg".to_string()))
            .unwrap();
        assert_eq!(config.out_dir, PathBuf::from("from-arg"));

        let config = config_from(&[(OUT_DIR_VAR, "from-env")])
            .unwrap()
            .with_out_dir_override(None)
            .unwrap();
        assert_eq!(config.out_dir, PathBuf::from("from-env"));
    }

    #[test]
    fn blank_argument_is_rejected_like_blank_env() {
        let result = config_from(&[]).unwrap().with_out_dir_override(Some("  ".to_string()));
        assert_eq!(result, Err(ConfigError::EmptyOutDir));
    }
}
