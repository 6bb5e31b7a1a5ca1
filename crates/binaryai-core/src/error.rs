use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {} is missing required key {key:?}", path.display())]
    MissingKey { path: PathBuf, key: &'static str },
}

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no default IDA user directory is known for platform {0:?}")]
    UnsupportedPlatform(String),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
}
