use clap::CommandFactory;

use crate::cli::{Cli, Command, BANNER};

pub(crate) fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(cmd) = cli.cmd else {
        println!("{BANNER}");
        Cli::command().print_help()?;
        return Ok(());
    };

    match cmd {
        Command::InstallIdaPlugin { directory } => {
            crate::commands::install::cmd_install_ida_plugin(directory.as_deref())
        }
        Command::QueryFunction { funcid, cfg } => {
            crate::commands::function::cmd_query_function(&funcid, cfg.as_deref())
        }
        Command::CreateFuncset { name, cfg } => {
            crate::commands::funcset::cmd_create_funcset(&name, cfg.as_deref())
        }
        Command::QueryFuncset { funcset, cfg } => {
            crate::commands::funcset::cmd_query_funcset(&funcset, cfg.as_deref())
        }
        Command::UploadFunctions {
            file,
            idat,
            funcset,
            script,
        } => crate::commands::batch::cmd_upload_functions(
            &file,
            &idat,
            funcset.as_deref(),
            script.script.as_deref(),
            &script.python,
        ),
        Command::MatchFunctions { file, idat, script } => {
            crate::commands::batch::cmd_match_functions(
                &file,
                &idat,
                script.script.as_deref(),
                &script.python,
            )
        }
    }
}
