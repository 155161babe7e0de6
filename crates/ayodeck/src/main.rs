mod app;
mod autoadvance;
mod cli;
mod commands;
mod config;
mod controller;
mod deck;
mod demo;
mod input;
mod intro;
mod logging;
mod modal;
mod render;
mod theme;

use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(e) = logging::initialize_logging(cli.verbose, cli.quiet) {
        eprintln!("{} {e}", "warning:".yellow().bold());
    }

    if let Err(e) = cli.run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
