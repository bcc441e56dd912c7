use anyhow::{Context, Result};
use std::path::Path;

use crate::challenge::{ChallengeCategory, Language, MathOperator};
use crate::gate::PinAuth;
use crate::settings::{
    self, EXAMPLE_SETTINGS, GateSettings, SettingsStore, authorize_change, parse_settings,
};

/// Create a settings file from the example
///
/// Overwriting a file that holds a parent PIN needs that PIN.
pub fn init(path: &Path, force: bool, current_pin: Option<&str>) -> Result<()> {
    if path.exists() {
        if !force {
            anyhow::bail!(
                "Settings file already exists: {}\nUse --force to overwrite",
                path.display()
            );
        }

        match settings::load_settings(path) {
            Ok(existing) => authorize_change(&existing, current_pin)?,
            Err(e) => tracing::warn!("Overwriting unreadable settings: {:#}", e),
        }
    }

    // The example must stay loadable
    parse_settings(EXAMPLE_SETTINGS).context("Built-in example settings are invalid")?;

    crate::platform::common::atomic_write(path, EXAMPLE_SETTINGS.as_bytes())
        .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

    println!("✓ Created settings file: {}", path.display());
    println!("\nSet the parent PIN before running the gate:");
    println!("  parent-gate settings set-pin <PIN> <PIN again>");

    Ok(())
}

/// Print current settings
pub fn show(path: &Path) -> Result<()> {
    let settings = settings::load_settings_or_default(path)?;

    println!("\n=== Parent Gate Settings ===\n");
    println!("File: {}", path.display());
    if !path.exists() {
        println!("      (not created yet, showing defaults)");
    }
    println!();
    println!("Learning mode:    {}", if settings.learning_enabled { "on" } else { "off" });
    println!("Child age:        {}", settings.child_age);
    println!("Session duration: {} minutes", settings.session_duration_minutes);

    let categories = if settings.categories.is_empty() {
        format!("none (falls back to {})", ChallengeCategory::Math)
    } else {
        join(&settings.categories)
    };
    println!("Categories:       {}", categories);
    println!("Math operators:   {}", join(&settings.math_operators));
    println!("Languages:        {}", join(&settings.languages));
    println!(
        "Parent PIN:       {}",
        if settings.pin_hash.is_some() { "set" } else { "not set" }
    );

    Ok(())
}

/// Set the parent PIN
///
/// The new PIN is entered twice.
pub fn set_pin(path: &Path, current_pin: Option<&str>, pin: &str, confirm: &str) -> Result<()> {
    if pin != confirm {
        anyhow::bail!("PINs do not match");
    }

    let hash = PinAuth::hash_pin(pin)?;
    update(path, current_pin, |settings| settings.pin_hash = Some(hash))?;

    println!("✓ Parent PIN updated");
    Ok(())
}

/// Set the session duration
pub fn set_duration(path: &Path, current_pin: Option<&str>, minutes: u32) -> Result<()> {
    update(path, current_pin, |settings| {
        settings.session_duration_minutes = minutes
    })?;

    println!("✓ Session duration set to {} minutes", minutes);
    println!("A running gate picks this up on its next settings check.");
    Ok(())
}

/// Set the child's age
pub fn set_age(path: &Path, current_pin: Option<&str>, age: u32) -> Result<()> {
    update(path, current_pin, |settings| settings.child_age = age)?;

    println!("✓ Child age set to {}", age);
    Ok(())
}

/// Turn learning mode on or off
pub fn set_learning(path: &Path, current_pin: Option<&str>, enabled: bool) -> Result<()> {
    update(path, current_pin, |settings| settings.learning_enabled = enabled)?;

    if enabled {
        println!("✓ Learning mode on");
    } else {
        println!("✓ Learning mode off, the gate shows a plain unlock screen");
    }
    Ok(())
}

/// Choose the challenge categories
pub fn set_categories(
    path: &Path,
    current_pin: Option<&str>,
    categories: &[ChallengeCategory],
) -> Result<()> {
    let categories = dedup(categories);
    if categories.is_empty() {
        anyhow::bail!("Enable at least one category");
    }

    let shown = join(&categories);
    update(path, current_pin, |settings| settings.categories = categories)?;

    println!("✓ Categories: {}", shown);
    Ok(())
}

/// Choose the math operators
pub fn set_operators(path: &Path, current_pin: Option<&str>, operators: &[MathOperator]) -> Result<()> {
    let operators = dedup(operators);
    if operators.is_empty() {
        anyhow::bail!("Enable at least one operator");
    }

    let shown = join(&operators);
    update(path, current_pin, |settings| settings.math_operators = operators)?;

    println!("✓ Math operators: {}", shown);
    Ok(())
}

/// Choose the translation languages
pub fn set_languages(path: &Path, current_pin: Option<&str>, languages: &[Language]) -> Result<()> {
    let languages = dedup(languages);
    if languages.is_empty() {
        anyhow::bail!("Enable at least one language");
    }

    let shown = join(&languages);
    update(path, current_pin, |settings| settings.languages = languages)?;

    println!("✓ Translation languages: {}", shown);
    Ok(())
}

/// Apply a change after checking the parent PIN
fn update<F>(path: &Path, current_pin: Option<&str>, change: F) -> Result<()>
where
    F: FnOnce(&mut GateSettings),
{
    let store = SettingsStore::open(path.to_path_buf())?;
    authorize_change(&store.snapshot(), current_pin)?;
    store.update(change)?;
    Ok(())
}

fn dedup<T: Copy + PartialEq>(items: &[T]) -> Vec<T> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(*item);
        }
    }
    unique
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
