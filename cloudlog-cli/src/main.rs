// cloudlog-cli/src/main.rs
//
// Entry point for the cloudlog binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up diagnostic logging on stderr.
// - Building the CloudLog facade from flags and environment variables.
// - Dispatching to the 'tee' or 'plot' command.
// - Managing the process exit code.

use anyhow::Context;
use clap::Parser;
use cloudlog_cli::{Cli, Commands, build_core_config, logging, run_plot, run_tee};
use cloudlog_core::CloudLog;
use log::debug;
use std::io;
use std::process;

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = build_core_config(&cli);
    let log = CloudLog::from_config(&config).context("Failed to initialise cloudlog")?;
    debug!("Log file: {}", log.log_file_path().display());

    match &cli.command {
        Commands::Tee(args) => {
            let stdin = io::stdin();
            let lines = run_tee(&log, stdin.lock(), args).context("Failed to tee input")?;
            debug!("Logged {} lines", lines);
        }
        Commands::Plot(args) => {
            run_plot(&log, args)
                .with_context(|| format!("Failed to publish plot '{}'", args.image.display()))?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
