use clap::Parser;
use enumforge::cli::{Cli, Commands};
use enumforge::commands;
use enumforge_core::enumforge_log;
use enumforge_core::error::Result;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    enumforge_log!("", "errors.log");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            enumforge_log!(format!("{e:?}"), "errors.log", true);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    debug!("Running command {:?}", cli.command);
    match &cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(cli, args.clone()).map(|_| ()),
        Some(Commands::Info(args)) => commands::info::run(cli, args.clone()),
        Some(Commands::Init(args)) => commands::init::run(cli, args.clone()).map(|_| ()),
        None => commands::generate::run_default(cli),
    }
}

/// `RUST_LOG` wins; otherwise `-q` shows errors only and each `-v` adds a level.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
