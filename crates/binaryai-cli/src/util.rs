use anyhow::Context;
use serde_json::Value;
use std::path::{Path, PathBuf};

use binaryai_core::paths::{default_config_path, process_env, Platform};
use binaryai_core::Config;

pub(crate) fn config_path(cfg: Option<&Path>) -> anyhow::Result<PathBuf> {
    match cfg {
        Some(p) => Ok(p.to_path_buf()),
        None => default_config_path(&Platform::current(), &process_env)
            .context("resolve default config path (pass --cfg)"),
    }
}

pub(crate) fn load_config(cfg: Option<&Path>) -> anyhow::Result<Config> {
    let path = config_path(cfg)?;
    log::debug!("loading config from {}", path.display());
    Ok(Config::load(&path)?)
}

/// Rebuilds every object with its keys in lexicographic order.
pub(crate) fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

pub(crate) fn to_sorted_pretty(value: Value) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&sort_keys(value))?)
}
