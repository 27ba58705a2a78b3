mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, Command};
use commands::CommandHandler;
use fconv::{error, types, Context};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let ctx = Context::default();

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Enc {
            format,
            r#in,
            out,
            all,
            json,
        } => Box::new(commands::EncCommand {
            format,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            all,
            json,
        }),

        Command::Dec {
            format,
            r#in,
            out,
            force,
            all,
            json,
        } => Box::new(commands::DecCommand {
            format,
            input: types::InputSource::parse(&r#in),
            output: types::OutputDest::parse(&out),
            force,
            all,
            json,
        }),

        Command::List { json } => Box::new(commands::ListCommand { json }),

        Command::Info { format, json } => Box::new(commands::InfoCommand { format, json }),

        Command::File {
            paths,
            format,
            direction,
            json,
        } => Box::new(commands::FileCommand {
            paths,
            format,
            direction: direction.into(),
            json,
        }),

        Command::Rows { state, action } => Box::new(commands::RowsCommand {
            state,
            op: action.into(),
        }),
    };

    handler.execute(&ctx)
}
