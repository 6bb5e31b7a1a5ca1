use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

use binaryai_core::error::PathError;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("Invalid plugin path: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error(transparent)]
    DefaultDir(#[from] PathError),

    #[error("cannot create plugin directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error while installing ida_binaryai.py into {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("IDA script {} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("python interpreter {} not found", .0.display())]
    PythonNotFound(PathBuf),

    #[error("cannot run python interpreter {}", path.display())]
    PythonSpawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("the binaryai python package is not importable: {stderr}")]
    PackageMissing { stderr: String },
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("{} not found", path.display())]
    ExecutableNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot launch {}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{action} functions fail ({status}), please check {} for more details", log.display())]
    Failed {
        action: &'static str,
        status: ExitStatus,
        log: PathBuf,
    },
}
