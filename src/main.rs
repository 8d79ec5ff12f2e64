use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    commands::handle_command(&cli)
}
