//! Default locations used by the IDA integration.
//!
//! Every function here is pure in the platform and the environment lookup it
//! is given, so callers (and tests) can resolve paths for any OS.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::PathError;

pub const PLUGIN_FILE_NAME: &str = "ida_binaryai.py";
pub const CONFIG_FILE_NAME: &str = "binaryai.cfg";
pub const LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other(String),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` value to a platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            other => Platform::Other(other.to_string()),
        }
    }
}

/// Environment lookup backed by the current process.
pub fn process_env(key: &str) -> Option<OsString> {
    std::env::var_os(key)
}

/// The per-user IDA directory: `%APPDATA%\Hex-Rays\IDA Pro` on Windows and
/// `$HOME/.idapro` on Linux and macOS.
pub fn user_ida_dir(
    platform: &Platform,
    env: &dyn Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, PathError> {
    let lookup = |key: &'static str| {
        env(key)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or(PathError::MissingEnv(key))
    };
    match platform {
        Platform::Windows => Ok(lookup("APPDATA")?.join("Hex-Rays").join("IDA Pro")),
        Platform::Linux | Platform::MacOs => Ok(lookup("HOME")?.join(".idapro")),
        Platform::Other(os) => Err(PathError::UnsupportedPlatform(os.clone())),
    }
}

pub fn default_plugin_dir(
    platform: &Platform,
    env: &dyn Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, PathError> {
    Ok(user_ida_dir(platform, env)?.join("plugins"))
}

pub fn default_config_path(
    platform: &Platform,
    env: &dyn Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, PathError> {
    Ok(user_ida_dir(platform, env)?
        .join("cfg")
        .join(CONFIG_FILE_NAME))
}

/// Where `idat` is told to write its log during batch runs.
pub fn default_log_path(
    platform: &Platform,
    env: &dyn Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, PathError> {
    Ok(user_ida_dir(platform, env)?.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| OsString::from(v))
        }
    }

    #[test]
    fn platform_from_os() {
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Other("freebsd".to_string())
        );
    }

    #[test]
    fn windows_uses_appdata() {
        let env = env_with(&[("APPDATA", "C:/Users/me/AppData/Roaming"), ("HOME", "/ignored")]);
        let dir = user_ida_dir(&Platform::Windows, &env).unwrap();
        assert_eq!(
            dir,
            PathBuf::from("C:/Users/me/AppData/Roaming")
                .join("Hex-Rays")
                .join("IDA Pro")
        );
    }

    #[test]
    fn unix_like_uses_home() {
        let env = env_with(&[("HOME", "/home/me")]);
        for platform in [Platform::Linux, Platform::MacOs] {
            assert_eq!(
                user_ida_dir(&platform, &env).unwrap(),
                PathBuf::from("/home/me/.idapro")
            );
        }
        assert_eq!(
            default_config_path(&Platform::Linux, &env).unwrap(),
            PathBuf::from("/home/me/.idapro/cfg/binaryai.cfg")
        );
        assert_eq!(
            default_plugin_dir(&Platform::Linux, &env).unwrap(),
            PathBuf::from("/home/me/.idapro/plugins")
        );
        assert_eq!(
            default_log_path(&Platform::MacOs, &env).unwrap(),
            PathBuf::from("/home/me/.idapro/log.txt")
        );
    }

    #[test]
    fn unknown_platform_is_an_error_not_an_empty_path() {
        let env = env_with(&[("HOME", "/home/me")]);
        let err = user_ida_dir(&Platform::Other("haiku".to_string()), &env).unwrap_err();
        assert!(matches!(err, PathError::UnsupportedPlatform(ref os) if os == "haiku"));
    }

    #[test]
    fn unset_or_empty_variable_is_reported() {
        let err = user_ida_dir(&Platform::Linux, &env_with(&[])).unwrap_err();
        assert!(matches!(err, PathError::MissingEnv("HOME")));
        let err = user_ida_dir(&Platform::Windows, &env_with(&[("APPDATA", "")])).unwrap_err();
        assert!(matches!(err, PathError::MissingEnv("APPDATA")));
    }
}
