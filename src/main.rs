mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Generate(args)) => commands::generate::run(&args),
        Some(Command::Init { path, force }) => commands::init::run(&path, force),
        None => commands::generate::run(&cli.generate),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
