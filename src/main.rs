use clap::Parser;
use mlgate::{run_gate, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run_gate(&cli)
}
