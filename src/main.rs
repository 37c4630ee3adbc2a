//! Frontdesk CLI - hotel rooms, guests, reservations and billing
//!
//! Running `frontdesk` opens the interactive front desk menu; all state is
//! kept in memory and saved to a single JSON data file on request.

mod menu;
mod theme;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use frontdesk::{Config, Guest, Hotel, Room};

/// Frontdesk - hotel front desk management
#[derive(Parser, Debug)]
#[command(name = "frontdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON data file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Hotel name when starting without a data file
    #[arg(long)]
    name: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (mut config, warnings) = Config::load_or_default(Some(&cwd));
    for warning in &warnings {
        eprintln!(
            "{}",
            theme::warning(&format!(
                "unknown config key `{}` in {}",
                warning.key,
                warning.file.display()
            ))
        );
    }

    if let Some(file) = cli.file {
        config.storage.data_file = file;
    }
    if let Some(name) = cli.name {
        config.hotel.name = name;
    }

    if !std::io::stdin().is_terminal() {
        println!("The front desk menu needs an interactive terminal.");
        println!("Try: `frontdesk --help`");
        return Ok(());
    }

    let mut hotel = Hotel::new(config.hotel.name.as_str());
    if !config.storage.data_file.exists() {
        // Fresh start: stock the demo inventory so the menu has something
        // to work with. An existing data file is loaded via the menu.
        seed_demo_data(&mut hotel)?;
        if cli.verbose > 0 {
            println!(
                "No data file at {}; starting with demo inventory.",
                config.storage.data_file.display()
            );
        }
    }

    menu::run(&mut hotel, &config)
}

fn seed_demo_data(hotel: &mut Hotel) -> frontdesk::FrontdeskResult<()> {
    hotel.add_room(Room::new("101", "Single", 99.99))?;
    hotel.add_room(Room::new("102", "Double", 149.99))?;
    hotel.add_room(Room::new("201", "Suite", 249.99))?;
    hotel.add_room(Room::new("202", "Double", 149.99))?;

    hotel.add_guest(Guest::new("G001", "John Doe", "john@example.com", "555-0101"))?;
    hotel.add_guest(Guest::new("G002", "Jane Smith", "jane@example.com", "555-0102"))?;
    Ok(())
}
