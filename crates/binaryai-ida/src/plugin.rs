use std::ffi::OsString;
use std::path::{Path, PathBuf};

use binaryai_core::paths::{default_plugin_dir, Platform, PLUGIN_FILE_NAME};

use crate::error::InstallError;

/// Trampoline dropped into the IDA plugins directory. IDA loads it at
/// startup and it hands over to the plugin shipped in the python package.
pub const PLUGIN_SOURCE: &str = "# generated by `binaryai install_ida_plugin`
def PLUGIN_ENTRY():
    from binaryai import ida_binaryai
    return ida_binaryai.BinaryAIIDAPlugin()
";

/// Picks the directory the trampoline goes into.
///
/// An explicit directory must already exist. Without one the per-user IDA
/// plugins directory is used and created on demand.
pub fn resolve_plugin_dir(
    directory: Option<&Path>,
    platform: &Platform,
    env: &dyn Fn(&str) -> Option<OsString>,
) -> Result<PathBuf, InstallError> {
    if let Some(dir) = directory {
        if !dir.is_dir() {
            return Err(InstallError::InvalidDirectory(dir.to_path_buf()));
        }
        return Ok(dir.to_path_buf());
    }

    let dir = default_plugin_dir(platform, env)?;
    if !dir.exists() {
        log::info!("creating plugin directory {}", dir.display());
        std::fs::create_dir_all(&dir).map_err(|source| InstallError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(dir)
}

/// Writes the trampoline into `dir`, replacing any previous copy.
pub fn write_plugin(dir: &Path) -> Result<PathBuf, InstallError> {
    let path = dir.join(PLUGIN_FILE_NAME);
    std::fs::write(&path, PLUGIN_SOURCE).map_err(|source| InstallError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home_env(home: PathBuf) -> impl Fn(&str) -> Option<OsString> {
        move |key| (key == "HOME").then(|| home.clone().into_os_string())
    }

    #[test]
    fn explicit_directory_must_exist() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("plugins");
        let env = home_env(tmp.path().to_path_buf());

        let err = resolve_plugin_dir(Some(&missing), &Platform::Linux, &env).unwrap_err();
        assert!(matches!(err, InstallError::InvalidDirectory(ref p) if p == &missing));
        assert!(!missing.exists());
        assert!(!tmp.path().join(".idapro").exists());
    }

    #[test]
    fn explicit_file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("plugins");
        std::fs::write(&file, "").unwrap();
        let env = home_env(tmp.path().to_path_buf());

        let err = resolve_plugin_dir(Some(&file), &Platform::Linux, &env).unwrap_err();
        assert!(matches!(err, InstallError::InvalidDirectory(_)));
    }

    #[test]
    fn default_directory_is_created() {
        let tmp = tempfile::tempdir().unwrap();
        let env = home_env(tmp.path().to_path_buf());

        let dir = resolve_plugin_dir(None, &Platform::MacOs, &env).unwrap();
        assert_eq!(dir, tmp.path().join(".idapro").join("plugins"));
        assert!(dir.is_dir());

        let written = write_plugin(&dir).unwrap();
        assert_eq!(written, dir.join("ida_binaryai.py"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), PLUGIN_SOURCE);
    }

    #[test]
    fn unknown_platform_without_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let env = home_env(tmp.path().to_path_buf());
        let err =
            resolve_plugin_dir(None, &Platform::Other("plan9".to_string()), &env).unwrap_err();
        assert!(matches!(err, InstallError::DefaultDir(_)));
    }

    #[test]
    fn trampoline_text_is_stable() {
        assert!(PLUGIN_SOURCE.starts_with("# generated by `binaryai install_ida_plugin`\n"));
        assert!(PLUGIN_SOURCE.ends_with("    return ida_binaryai.BinaryAIIDAPlugin()\n"));
        assert_eq!(PLUGIN_SOURCE.lines().count(), 4);
    }
}
