use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "/css/";
pub const DEFAULT_SUFFIX: &str = ".css";

/// Where selected stylesheets are loaded from.
///
/// The href of a stylesheet is `base_url + identifier + suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub base_url: String,
    pub suffix: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl SelectorConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn missing_fields_use_defaults() {
        let config =
            SelectorConfig::from_yaml_str("base_url: https://static.example.org/skins/\n")
                .unwrap();
        assert_eq!(config.base_url, "https://static.example.org/skins/");
        assert_eq!(config.suffix, DEFAULT_SUFFIX);
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: /styles/\nsuffix: .min.css").unwrap();
        let config = SelectorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "/styles/");
        assert_eq!(config.suffix, ".min.css");
    }

    #[test]
    fn bad_yaml_and_missing_file() {
        assert!(matches!(
            SelectorConfig::from_yaml_str("base_url: [1, 2"),
            Err(Error::YAML(_))
        ));
        assert!(matches!(
            SelectorConfig::from_file("/nonexistent/ua-stylesheet.yml"),
            Err(Error::IO(_))
        ));
    }
}
