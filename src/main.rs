//! gearbox - named adapter registries.
//!
//! Loads a registry configuration, builds the registries and prints their
//! collections as JSON.

mod cli;
mod commands;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = commands::load_config(cli.config.as_deref())?;
    logging::init_tracing(&config.log)?;

    match cli.command.unwrap_or(Commands::Show {
        registry: None,
        add: Vec::new(),
        remove: Vec::new(),
    }) {
        Commands::Show {
            registry,
            add,
            remove,
        } => {
            let value = commands::show(&config, registry.as_deref(), &add, &remove)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Commands::Validate => {
            if !commands::validate(&config)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
