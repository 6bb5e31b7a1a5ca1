use anyhow::Context;
use std::path::{Path, PathBuf};

use binaryai_core::paths::{default_log_path, process_env, Platform};
use binaryai_core::FunctionSetId;
use binaryai_ida::script::locate_script;
use binaryai_ida::{database_path, ensure_executable, BatchJob, BatchMode};

pub(crate) fn cmd_upload_functions(
    file: &Path,
    idat: &Path,
    funcset: Option<&str>,
    script: Option<&Path>,
    python: &Path,
) -> anyhow::Result<()> {
    let funcset = funcset
        .filter(|s| !s.is_empty())
        .map(FunctionSetId::from);
    let job = build_job(file, idat, script, python, BatchMode::Upload { funcset })?;
    job.run()?;
    println!("Done");
    Ok(())
}

pub(crate) fn cmd_match_functions(
    file: &Path,
    idat: &Path,
    script: Option<&Path>,
    python: &Path,
) -> anyhow::Result<()> {
    let job = build_job(file, idat, script, python, BatchMode::Match)?;
    job.run()?;
    let db = database_path(file, idat)
        .with_context(|| format!("resolve absolute path of {}", file.display()))?;
    println!("idb file is stored in {}", db.display());
    println!("Done");
    Ok(())
}

fn build_job(
    file: &Path,
    idat: &Path,
    script: Option<&Path>,
    python: &Path,
    mode: BatchMode,
) -> anyhow::Result<BatchJob> {
    ensure_executable(idat)?;
    let log: PathBuf = default_log_path(&Platform::current(), &process_env)
        .context("resolve IDA log path")?;
    let script = locate_script(script, python).context("locate ida_binaryai.py")?;
    Ok(BatchJob {
        idat: idat.to_path_buf(),
        script,
        log,
        file: file.to_path_buf(),
        mode,
    })
}
