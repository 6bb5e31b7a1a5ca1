//! IDA Pro integration: installing the loader plugin and running `idat` in
//! batch mode to upload or match the functions of a binary.

pub mod batch;
pub mod error;
pub mod plugin;
pub mod script;

pub use batch::{database_path, ensure_executable, BatchJob, BatchMode};
pub use error::{BatchError, InstallError, ScriptError};
