use std::path::Path;

use binaryai_core::paths::{process_env, Platform};
use binaryai_ida::plugin::{resolve_plugin_dir, write_plugin};

pub(crate) fn cmd_install_ida_plugin(directory: Option<&Path>) -> anyhow::Result<()> {
    let dir = resolve_plugin_dir(directory, &Platform::current(), &process_env)?;
    println!("installing ida_binaryai.py into {}", dir.display());
    write_plugin(&dir)?;
    println!("Done");
    Ok(())
}
