use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub(crate) const BANNER: &str = r"
 ____  _                           _    ___
| __ )(_)_ __   __ _ _ __ _   _   / \  |_ _|
|  _ \| | '_ \ / _` | '__| | | | / _ \  | |
| |_) | | | | | (_| | |  | |_| |/ ___ \ | |
|____/|_|_| |_|\__,_|_|   \__, /_/   \_\___|
                          |___/
";

#[derive(Parser)]
#[command(
    name = "binaryai",
    version,
    about = "Command line tools for the BinaryAI binary code similarity service.",
    long_about = "Command line tools for the BinaryAI binary code similarity service.\n\nNotes:\n  - Remote commands read {\"token\", \"url\"} from a JSON config (default: <IDA user dir>/cfg/binaryai.cfg).\n  - upload_functions / match_functions run idat in batch mode; progress is written to <IDA user dir>/log.txt.\n  - Set BINARYAI_LOG=debug for diagnostics.",
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub(crate) struct Cli {
    /// Show version.
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    #[command(subcommand)]
    pub(crate) cmd: Option<Command>,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Install the IDA plugin.
    #[command(name = "install_ida_plugin")]
    InstallIdaPlugin {
        /// IDA plugin directory (must exist; defaults to <IDA user dir>/plugins).
        #[arg(short, long)]
        directory: Option<PathBuf>,
    },
    /// Get function info by id.
    #[command(name = "query_function")]
    QueryFunction {
        /// Function id.
        #[arg(short = 'f', long)]
        funcid: String,
        /// BinaryAI configuration file.
        #[arg(short, long, env = "BINARYAI_CFG")]
        cfg: Option<PathBuf>,
    },
    /// Create a new function set.
    #[command(name = "create_funcset")]
    CreateFuncset {
        /// Function set name.
        #[arg(short, long)]
        name: String,
        /// BinaryAI configuration file.
        #[arg(short, long, env = "BINARYAI_CFG")]
        cfg: Option<PathBuf>,
    },
    /// Get function set info by id.
    #[command(name = "query_funcset")]
    QueryFuncset {
        /// Function set id.
        #[arg(short = 's', long)]
        funcset: String,
        /// BinaryAI configuration file.
        #[arg(short, long, env = "BINARYAI_CFG")]
        cfg: Option<PathBuf>,
    },
    /// Upload the functions of the chosen file.
    #[command(name = "upload_functions")]
    UploadFunctions {
        /// File to be uploaded.
        #[arg(short, long)]
        file: PathBuf,
        /// Path of idat/idat64.
        #[arg(short, long)]
        idat: PathBuf,
        /// Function set to upload into.
        #[arg(short = 's', long)]
        funcset: Option<String>,
        #[command(flatten)]
        script: ScriptArgs,
    },
    /// Match the functions of the chosen file.
    #[command(name = "match_functions")]
    MatchFunctions {
        /// File to be matched.
        #[arg(short, long)]
        file: PathBuf,
        /// Path of idat/idat64.
        #[arg(short, long)]
        idat: PathBuf,
        #[command(flatten)]
        script: ScriptArgs,
    },
}

#[derive(clap::Args)]
pub(crate) struct ScriptArgs {
    /// Path of ida_binaryai.py (located through the python package if omitted).
    #[arg(long, env = "BINARYAI_IDA_SCRIPT")]
    pub(crate) script: Option<PathBuf>,
    /// Python interpreter used to locate the binaryai package.
    #[arg(long, env = "BINARYAI_PYTHON", default_value = binaryai_ida::script::DEFAULT_PYTHON)]
    pub(crate) python: PathBuf,
}
