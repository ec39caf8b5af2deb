use std::process::ExitCode;

use callcenter::commands::base_commands::{CliArgs, Commands};
use callcenter::commands::init_cmd::init_command;
use callcenter::commands::labor_cost_cmd::labor_cost_command;
use callcenter::commands::project_cmd::project_command;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::Project { .. } => project_command(cmd),
        cmd @ Commands::LaborCost { .. } => labor_cost_command(cmd),
        cmd @ Commands::Init { .. } => init_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
