use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::ConfigError;

/// Credentials used to reach the BinaryAI service.
///
/// Loaded from a small JSON document of the form
/// `{"token": "...", "url": "..."}`. Both keys are required; any other keys
/// are ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub url: String,
}

#[derive(Deserialize)]
struct RawConfig {
    token: Option<String>,
    url: Option<String>,
}

impl Config {
    pub fn new(token: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            url: url.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    /// Parses config JSON; `path` is only used to label errors.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let missing = |key| ConfigError::MissingKey {
            path: path.to_path_buf(),
            key,
        };
        Ok(Self {
            token: raw.token.ok_or_else(|| missing("token"))?,
            url: raw.url.ok_or_else(|| missing("url"))?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("url", &self.url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_token_and_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binaryai.cfg");
        std::fs::write(
            &path,
            r#"{"token": "abc", "url": "https://api.example.com/v1/endpoint", "extra": 1}"#,
        )
        .unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg, Config::new("abc", "https://api.example.com/v1/endpoint"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.cfg")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }), "{err:?}");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = Config::from_json(Path::new("x.cfg"), "{token:").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    }

    #[test]
    fn missing_key_is_named() {
        let err = Config::from_json(Path::new("x.cfg"), r#"{"token": "abc"}"#).unwrap_err();
        match err {
            ConfigError::MissingKey { key, .. } => assert_eq!(key, "url"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err_text(r#"{"url": "u"}"#).contains("\"token\""));
    }

    #[test]
    fn debug_hides_token() {
        let rendered = format!("{:?}", Config::new("secret-token", "u"));
        assert!(!rendered.contains("secret-token"));
    }

    fn err_text(json: &str) -> String {
        Config::from_json(Path::new("x.cfg"), json)
            .unwrap_err()
            .to_string()
    }
}
