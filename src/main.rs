use std::process::ExitCode;

use clap::Parser;
use dstok::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => dstok::cli::validate::run(args),
        Commands::Web(args) => dstok::cli::web::run(args),
        Commands::Android(args) => dstok::cli::android::run(args),
        Commands::Swift(args) => dstok::cli::swift::run(args),
        Commands::Completions(args) => dstok::cli::completions::run(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            // Input errors (unreadable file, bad JSON) share exit code 2
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::from(2)
        }
    }
}
