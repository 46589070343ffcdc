use std::process::ExitCode;

use clap::Parser;

mod cli;
mod logging;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.log_level) {
        eprintln!("warning: logging unavailable: {err}");
    }

    match cli::run(&cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
