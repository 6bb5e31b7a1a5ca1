//! Locating `ida_binaryai.py`, the IDA-side script that does the actual
//! feature extraction and matching. It ships with the `binaryai` python
//! package, so unless a path is given explicitly we ask the interpreter.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use binaryai_core::paths::PLUGIN_FILE_NAME;

use crate::error::ScriptError;

pub const DEFAULT_PYTHON: &str = "python3";

const LOCATE_SNIPPET: &str =
    "import os, binaryai; print(os.path.dirname(os.path.abspath(binaryai.__file__)))";

pub fn locate_script(explicit: Option<&Path>, python: &Path) -> Result<PathBuf, ScriptError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => package_dir(python)?.join(PLUGIN_FILE_NAME),
    };
    if !path.is_file() {
        return Err(ScriptError::Missing(path));
    }
    Ok(path)
}

fn package_dir(python: &Path) -> Result<PathBuf, ScriptError> {
    log::debug!("asking {} for the binaryai package location", python.display());
    let output = match Command::new(python).args(["-c", LOCATE_SNIPPET]).output() {
        Ok(out) => out,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScriptError::PythonNotFound(python.to_path_buf()))
        }
        Err(source) => {
            return Err(ScriptError::PythonSpawn {
                path: python.to_path_buf(),
                source,
            })
        }
    };
    if !output.status.success() {
        return Err(ScriptError::PackageMissing {
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(PathBuf::from(stdout.trim()))
}
