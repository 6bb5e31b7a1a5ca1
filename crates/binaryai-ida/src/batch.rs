//! Running `idat` in batch mode.
//!
//! The plugin script receives a dispatch code through `-S`: `1` uploads the
//! functions of the analysed file (optionally into a function set), `2`
//! matches them against the service and annotates the resulting database.
//! The command is spawned from an argument vector, never through a shell.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use binaryai_core::FunctionSetId;

use crate::error::BatchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchMode {
    Upload { funcset: Option<FunctionSetId> },
    Match,
}

impl BatchMode {
    fn code(&self) -> &'static str {
        match self {
            BatchMode::Upload { .. } => "1",
            BatchMode::Match => "2",
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            BatchMode::Upload { .. } => "Upload",
            BatchMode::Match => "Match",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchJob {
    /// `idat` or `idat64` executable.
    pub idat: PathBuf,
    pub script: PathBuf,
    pub log: PathBuf,
    /// Binary to analyse.
    pub file: PathBuf,
    pub mode: BatchMode,
}

impl BatchJob {
    /// Value passed to `-S`: the script followed by its own arguments. IDA
    /// splits this on whitespace, so a script path containing spaces is
    /// quoted.
    pub fn script_arg(&self) -> OsString {
        let script = self.script.as_os_str();
        let mut arg = OsString::from("-S");
        if script.to_string_lossy().contains(char::is_whitespace) {
            arg.push("\"");
            arg.push(script);
            arg.push("\"");
        } else {
            arg.push(script);
        }
        arg.push(" ");
        arg.push(self.mode.code());
        if let BatchMode::Upload {
            funcset: Some(funcset),
        } = &self.mode
        {
            arg.push(" ");
            arg.push(funcset.as_str());
        }
        arg
    }

    pub fn args(&self) -> Vec<OsString> {
        let mut log = OsString::from("-L");
        log.push(&self.log);
        vec![
            log,
            OsString::from("-A"),
            self.script_arg(),
            self.file.clone().into_os_string(),
        ]
    }

    /// Spawns `idat`, inheriting stdio, and waits for it to exit.
    pub fn run(&self) -> Result<(), BatchError> {
        let args = self.args();
        log::info!("running {} {:?}", self.idat.display(), args);

        let status = match Command::new(&self.idat).args(&args).status() {
            Ok(status) => status,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                return Err(BatchError::ExecutableNotFound {
                    path: self.idat.clone(),
                    source,
                })
            }
            Err(source) => {
                return Err(BatchError::Spawn {
                    path: self.idat.clone(),
                    source,
                })
            }
        };

        if !status.success() {
            return Err(BatchError::Failed {
                action: self.mode.action(),
                status,
                log: self.log.clone(),
            });
        }
        log::debug!("{} exited with {status}", self.idat.display());
        Ok(())
    }
}

/// Fails with [`BatchError::ExecutableNotFound`] unless `idat` names an
/// existing file. A bare command name is looked up on `PATH`.
pub fn ensure_executable(idat: &Path) -> Result<(), BatchError> {
    let found = if idat.components().count() > 1 {
        idat.is_file()
    } else {
        std::env::var_os("PATH").is_some_and(|paths| {
            std::env::split_paths(&paths).any(|dir| {
                let candidate = dir.join(idat);
                candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
            })
        })
    };
    if found {
        return Ok(());
    }
    Err(BatchError::ExecutableNotFound {
        path: idat.to_path_buf(),
        source: ErrorKind::NotFound.into(),
    })
}

/// Database IDA leaves next to `file` after a batch run: `<file>.idb` for the
/// 32-bit `idat`, `<file>.i64` for anything else (`idat64`).
pub fn database_path(file: &Path, idat: &Path) -> std::io::Result<PathBuf> {
    let is_32bit = idat
        .file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with("idat"));
    let ext = if is_32bit { ".idb" } else { ".i64" };

    let mut path = std::path::absolute(file)?.into_os_string();
    path.push(ext);
    Ok(PathBuf::from(path))
}
