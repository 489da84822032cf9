mod archive;
mod config;
mod errlog;
mod remove;
mod runner;
mod select;
mod types;
mod validate;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "File retention task runner (Rust)")]
struct Cli {
    /// Task list document (JSON array; .yaml/.yml also accepted)
    #[arg(long, default_value = "tasks.json")]
    config: PathBuf,

    /// Append-only error log, one line per fatal condition
    #[arg(long, default_value = "error.log")]
    error_log: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        let message = format!("{err:#}");
        if let Err(log_err) = errlog::append(&cli.error_log, &message) {
            eprintln!("error log unavailable: {log_err:#}");
        }
        eprintln!("ERROR: {message}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    println!("CONFIG    = {:?}", cli.config);
    println!("ERROR LOG = {:?}", cli.error_log);

    let tasks = config::load_tasks(&cli.config)?;
    runner::run_tasks(&tasks)
}
