use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::challenge::{ChallengeCategory, Language, MathOperator};

/// Parental Unlock Gate
///
/// Keeps a device locked behind an age-appropriate challenge or the parent
/// PIN, and re-locks it when the screen turns off or the session runs out.
#[derive(Parser, Debug)]
#[command(name = "parent-gate")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the settings file (defaults to the per-user config directory)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the gate, reading device signals and gate input from stdin
    Run {
        /// The device has a secure lock screen (wait for user-present)
        #[arg(long)]
        secure_keyguard: bool,

        /// How often to check the settings file for changes, in seconds
        #[arg(long, default_value = "5")]
        poll_interval: u64,
    },
    /// Print generated challenges
    Challenge {
        /// Category to generate (random enabled category if omitted)
        #[arg(long, value_enum)]
        category: Option<ChallengeCategory>,

        /// Child age (defaults to the configured age)
        #[arg(long)]
        age: Option<u32>,

        /// Number of challenges
        #[arg(long, default_value = "1")]
        count: usize,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage parent settings
    Settings {
        /// Current parent PIN, needed for changes once a PIN is set
        #[arg(long, global = true)]
        current_pin: Option<String>,

        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Create a settings file from the commented example
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Show current settings
    Show,
    /// Set the 4-digit parent PIN
    SetPin {
        pin: String,

        /// The new PIN again
        confirm: String,
    },
    /// Set the session duration in minutes
    SetDuration {
        minutes: u32,
    },
    /// Set the child's age
    SetAge {
        age: u32,
    },
    /// Turn learning mode on or off (off shows a plain unlock screen)
    SetLearning {
        #[arg(
            required = true,
            action = clap::ArgAction::Set,
            value_parser = clap::builder::BoolishValueParser::new()
        )]
        enabled: bool,
    },
    /// Choose the challenge categories
    SetCategories {
        #[arg(value_enum, required = true, value_delimiter = ',')]
        categories: Vec<ChallengeCategory>,
    },
    /// Choose the math operators
    SetOperators {
        #[arg(value_enum, required = true, value_delimiter = ',')]
        operators: Vec<MathOperator>,
    },
    /// Choose the translation languages
    SetLanguages {
        #[arg(value_enum, required = true, value_delimiter = ',')]
        languages: Vec<Language>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_command(args: &[&str]) -> (Option<String>, SettingsCommands) {
        let args = Args::try_parse_from(args.iter().copied()).unwrap();
        match args.command {
            Commands::Settings {
                current_pin,
                command,
            } => (current_pin, command),
            other => panic!("expected a settings command, got {:?}", other),
        }
    }

    #[test]
    fn test_current_pin_before_or_after_subcommand() {
        let (pin, _) = settings_command(&["parent-gate", "settings", "--current-pin", "1234", "set-age", "9"]);
        assert_eq!(pin.as_deref(), Some("1234"));

        let (pin, command) = settings_command(&["parent-gate", "settings", "set-age", "9", "--current-pin", "1234"]);
        assert_eq!(pin.as_deref(), Some("1234"));
        assert!(matches!(command, SettingsCommands::SetAge { age: 9 }));
    }

    #[test]
    fn test_set_lists() {
        let (_, command) = settings_command(&["parent-gate", "settings", "set-categories", "math,general-knowledge"]);
        match command {
            SettingsCommands::SetCategories { categories } => assert_eq!(
                categories,
                vec![ChallengeCategory::Math, ChallengeCategory::GeneralKnowledge]
            ),
            other => panic!("unexpected {:?}", other),
        }

        let (_, command) = settings_command(&["parent-gate", "settings", "set-languages", "french", "hindi"]);
        match command {
            SettingsCommands::SetLanguages { languages } => {
                assert_eq!(languages, vec![Language::French, Language::Hindi])
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(Args::try_parse_from(["parent-gate", "settings", "set-operators"]).is_err());
        assert!(Args::try_parse_from(["parent-gate", "settings", "set-operators", "modulo"]).is_err());
    }

    #[test]
    fn test_set_learning_accepts_on_off() {
        let (_, command) = settings_command(&["parent-gate", "settings", "set-learning", "off"]);
        assert!(matches!(command, SettingsCommands::SetLearning { enabled: false }));

        let (_, command) = settings_command(&["parent-gate", "settings", "set-learning", "on"]);
        assert!(matches!(command, SettingsCommands::SetLearning { enabled: true }));
    }

    #[test]
    fn test_set_pin_needs_confirmation() {
        assert!(Args::try_parse_from(["parent-gate", "settings", "set-pin", "1234"]).is_err());
        let (_, command) = settings_command(&["parent-gate", "settings", "set-pin", "1234", "1234"]);
        assert!(matches!(command, SettingsCommands::SetPin { .. }));
    }
}
