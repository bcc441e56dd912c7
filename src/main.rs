use anyhow::Result;
use clap::Parser;

mod challenge;
mod cli;
mod commands;
mod device;
mod gate;
mod platform;
mod settings;

use cli::{Args, Commands, SettingsCommands};
use commands::utils::{init_logging, resolve_settings_path};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings_path = resolve_settings_path(args.settings)?;

    match args.command {
        Commands::Run {
            secure_keyguard,
            poll_interval,
        } => commands::run_gate(settings_path, secure_keyguard, poll_interval),
        Commands::Challenge {
            category,
            age,
            count,
            json,
        } => commands::challenge::print_challenges(&settings_path, category, age, count, json),
        Commands::Settings {
            current_pin,
            command,
        } => run_settings_command(command, &settings_path, current_pin.as_deref()),
    }
}

/// Run settings subcommands
fn run_settings_command(
    command: SettingsCommands,
    path: &std::path::Path,
    current_pin: Option<&str>,
) -> Result<()> {
    match command {
        SettingsCommands::Init { force } => commands::settings::init(path, force, current_pin),
        SettingsCommands::Show => commands::settings::show(path),
        SettingsCommands::SetPin { pin, confirm } => {
            commands::settings::set_pin(path, current_pin, &pin, &confirm)
        }
        SettingsCommands::SetDuration { minutes } => {
            commands::settings::set_duration(path, current_pin, minutes)
        }
        SettingsCommands::SetAge { age } => commands::settings::set_age(path, current_pin, age),
        SettingsCommands::SetLearning { enabled } => {
            commands::settings::set_learning(path, current_pin, enabled)
        }
        SettingsCommands::SetCategories { categories } => {
            commands::settings::set_categories(path, current_pin, &categories)
        }
        SettingsCommands::SetOperators { operators } => {
            commands::settings::set_operators(path, current_pin, &operators)
        }
        SettingsCommands::SetLanguages { languages } => {
            commands::settings::set_languages(path, current_pin, &languages)
        }
    }
}
