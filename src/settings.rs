use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::challenge::{ChallengeCategory, Language, MathOperator};
use crate::gate::auth::PinAuth;

/// Youngest and oldest child age accepted in settings
pub const CHILD_AGE_RANGE: std::ops::RangeInclusive<u32> = 3..=18;

/// Allowed grace period, in minutes (one minute to one day)
pub const SESSION_MINUTES_RANGE: std::ops::RangeInclusive<u32> = 1..=1440;

/// Read-only view of parent settings used by the gate
pub trait SettingsProvider: Send + Sync {
    fn is_learning_enabled(&self) -> bool;
    fn enabled_categories(&self) -> Vec<ChallengeCategory>;
    fn child_age(&self) -> u32;
    fn session_duration_minutes(&self) -> u32;
    fn math_operator_enabled(&self, op: MathOperator) -> bool;
    fn language_enabled(&self, lang: Language) -> bool;
    /// Check a PIN entered on the gate against the stored hash
    fn verify_pin(&self, candidate: &str) -> bool;
}

/// Parent settings persisted as YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GateSettings {
    /// Show a challenge instead of a plain unlock button
    #[serde(default = "default_true")]
    pub learning_enabled: bool,

    /// Challenge categories to draw from
    #[serde(default = "default_categories")]
    pub categories: Vec<ChallengeCategory>,

    #[serde(default = "default_child_age")]
    pub child_age: u32,

    /// Grace period after the gate is passed
    #[serde(default = "default_session_minutes")]
    pub session_duration_minutes: u32,

    #[serde(default = "default_math_operators")]
    pub math_operators: Vec<MathOperator>,

    /// Target languages for translation questions
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,

    /// Argon2 hash of the parent PIN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin_hash: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_categories() -> Vec<ChallengeCategory> {
    vec![ChallengeCategory::Math]
}

fn default_child_age() -> u32 {
    7
}

fn default_session_minutes() -> u32 {
    15
}

fn default_math_operators() -> Vec<MathOperator> {
    vec![MathOperator::Add, MathOperator::Subtract]
}

fn default_languages() -> Vec<Language> {
    vec![Language::Spanish]
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            learning_enabled: true,
            categories: default_categories(),
            child_age: default_child_age(),
            session_duration_minutes: default_session_minutes(),
            math_operators: default_math_operators(),
            languages: default_languages(),
            pin_hash: None,
        }
    }
}

impl SettingsProvider for GateSettings {
    fn is_learning_enabled(&self) -> bool {
        self.learning_enabled
    }

    fn enabled_categories(&self) -> Vec<ChallengeCategory> {
        self.categories.clone()
    }

    fn child_age(&self) -> u32 {
        self.child_age
    }

    fn session_duration_minutes(&self) -> u32 {
        self.session_duration_minutes
    }

    fn math_operator_enabled(&self, op: MathOperator) -> bool {
        self.math_operators.contains(&op)
    }

    fn language_enabled(&self, lang: Language) -> bool {
        self.languages.contains(&lang)
    }

    fn verify_pin(&self, candidate: &str) -> bool {
        let Some(hash) = self.pin_hash.as_deref() else {
            tracing::warn!("PIN entered but no parent PIN is configured");
            return false;
        };

        match PinAuth::verify_pin(candidate, hash) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("PIN verification failed: {:#}", e);
                false
            }
        }
    }
}

/// Get the default settings file path
pub fn get_settings_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "parent-gate")
        .context("Could not determine settings directory")?;

    Ok(dirs.config_dir().join("settings.yaml"))
}

/// Parse and validate settings from YAML text
pub fn parse_settings(content: &str) -> Result<GateSettings> {
    let settings: GateSettings =
        serde_yaml::from_str(content).context("Failed to parse settings YAML")?;

    validate_settings(&settings)?;

    Ok(settings)
}

/// Load settings from a YAML file
pub fn load_settings(path: &Path) -> Result<GateSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    parse_settings(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}

/// Load settings, or defaults when the file does not exist yet
pub fn load_settings_or_default(path: &Path) -> Result<GateSettings> {
    if path.exists() {
        load_settings(path)
    } else {
        Ok(GateSettings::default())
    }
}

/// Check the parent PIN before a settings change
///
/// Anyone may change settings while no PIN is set, which is how the first
/// PIN gets stored.
pub fn authorize_change(settings: &GateSettings, current_pin: Option<&str>) -> Result<()> {
    if settings.pin_hash.is_none() {
        return Ok(());
    }

    let Some(pin) = current_pin else {
        anyhow::bail!("A parent PIN is set, enter it to change settings");
    };

    if !settings.verify_pin(pin) {
        tracing::warn!("Settings change rejected: incorrect parent PIN");
        anyhow::bail!("Incorrect parent PIN");
    }

    Ok(())
}

/// Save settings to a YAML file
pub fn save_settings(path: &Path, settings: &GateSettings) -> Result<()> {
    validate_settings(settings)?;

    let content = serde_yaml::to_string(settings).context("Failed to serialize settings to YAML")?;

    crate::platform::common::atomic_write(path, content.as_bytes())
        .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

    Ok(())
}

/// Validate settings
///
/// Empty category, operator and language lists are accepted. The generator
/// substitutes defaults for them.
pub fn validate_settings(settings: &GateSettings) -> Result<()> {
    if !CHILD_AGE_RANGE.contains(&settings.child_age) {
        anyhow::bail!(
            "Child age must be between {} and {}, got {}",
            CHILD_AGE_RANGE.start(),
            CHILD_AGE_RANGE.end(),
            settings.child_age
        );
    }

    if !SESSION_MINUTES_RANGE.contains(&settings.session_duration_minutes) {
        anyhow::bail!(
            "Session duration must be between {} and {} minutes, got {}",
            SESSION_MINUTES_RANGE.start(),
            SESSION_MINUTES_RANGE.end(),
            settings.session_duration_minutes
        );
    }

    if let Some(hash) = &settings.pin_hash {
        PinAuth::check_hash(hash).context("Invalid pin_hash")?;
    }

    Ok(())
}

/// Example settings file content
pub const EXAMPLE_SETTINGS: &str = include_str!("../gate-settings.example.yaml");

/// What changed after the settings file was reloaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsChange {
    pub duration_changed: bool,
}

/// Shared settings backed by a YAML file
///
/// Readers always see a complete snapshot. The file is re-read only when its
/// SHA-256 fingerprint changes.
pub struct SettingsStore {
    path: PathBuf,
    current: RwLock<GateSettings>,
    fingerprint: RwLock<Option<String>>,
}

impl SettingsStore {
    /// Open the store, using defaults when the file does not exist yet
    pub fn open(path: PathBuf) -> Result<Self> {
        let (settings, fingerprint) = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
            let settings = parse_settings(&content)
                .with_context(|| format!("Invalid settings file: {}", path.display()))?;
            (settings, Some(fingerprint(&content)))
        } else {
            tracing::info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            (GateSettings::default(), None)
        };

        Ok(Self {
            path,
            current: RwLock::new(settings),
            fingerprint: RwLock::new(fingerprint),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> GateSettings {
        self.read().clone()
    }

    /// Re-read the settings file if its content changed on disk
    pub fn reload_if_changed(&self) -> Result<Option<SettingsChange>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings file: {}", self.path.display()))?;
        let new_fingerprint = fingerprint(&content);

        if self.current_fingerprint().as_deref() == Some(new_fingerprint.as_str()) {
            return Ok(None);
        }

        let settings = parse_settings(&content)
            .with_context(|| format!("Invalid settings file: {}", self.path.display()))?;

        tracing::info!("Settings changed (hash: {})", &new_fingerprint[..16]);
        Ok(Some(self.replace(settings, new_fingerprint)))
    }

    /// Apply a change, persist it and make it visible to readers
    pub fn update<F>(&self, change: F) -> Result<SettingsChange>
    where
        F: FnOnce(&mut GateSettings),
    {
        let mut settings = self.snapshot();
        change(&mut settings);

        save_settings(&self.path, &settings)?;
        let content = serde_yaml::to_string(&settings).context("Failed to serialize settings to YAML")?;

        Ok(self.replace(settings, fingerprint(&content)))
    }

    fn replace(&self, settings: GateSettings, new_fingerprint: String) -> SettingsChange {
        let mut current = self.write();
        let change = SettingsChange {
            duration_changed: current.session_duration_minutes != settings.session_duration_minutes,
        };
        *current = settings;
        drop(current);

        *self
            .fingerprint
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(new_fingerprint);

        change
    }

    fn current_fingerprint(&self) -> Option<String> {
        self.fingerprint
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, GateSettings> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, GateSettings> {
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SettingsProvider for SettingsStore {
    fn is_learning_enabled(&self) -> bool {
        self.read().is_learning_enabled()
    }

    fn enabled_categories(&self) -> Vec<ChallengeCategory> {
        self.read().enabled_categories()
    }

    fn child_age(&self) -> u32 {
        self.read().child_age()
    }

    fn session_duration_minutes(&self) -> u32 {
        self.read().session_duration_minutes()
    }

    fn math_operator_enabled(&self, op: MathOperator) -> bool {
        self.read().math_operator_enabled(op)
    }

    fn language_enabled(&self, lang: Language) -> bool {
        self.read().language_enabled(lang)
    }

    fn verify_pin(&self, candidate: &str) -> bool {
        // Hash outside the lock
        let snapshot = self.snapshot();
        snapshot.verify_pin(candidate)
    }
}

/// Compute SHA-256 fingerprint of settings file content
fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();

    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("sha256:{}", hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn test_defaults() {
        let settings = GateSettings::default();
        assert!(settings.is_learning_enabled());
        assert_eq!(settings.enabled_categories(), vec![ChallengeCategory::Math]);
        assert_eq!(settings.child_age(), 7);
        assert_eq!(settings.session_duration_minutes(), 15);
        assert!(settings.math_operator_enabled(MathOperator::Add));
        assert!(settings.math_operator_enabled(MathOperator::Subtract));
        assert!(!settings.math_operator_enabled(MathOperator::Multiply));
        assert!(!settings.math_operator_enabled(MathOperator::Divide));
        assert!(settings.language_enabled(Language::Spanish));
        assert!(!settings.language_enabled(Language::Hindi));
        assert!(!settings.verify_pin("1234"));
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let settings = parse_settings("{}").unwrap();
        assert_eq!(settings, GateSettings::default());
    }

    #[test]
    fn test_example_settings_parse() {
        let settings = parse_settings(EXAMPLE_SETTINGS).unwrap();
        assert!(settings.learning_enabled);
        assert!(!settings.categories.is_empty());
    }

    #[test]
    fn test_validate_child_age() {
        let mut settings = GateSettings::default();
        settings.child_age = 2;
        assert!(validate_settings(&settings).is_err());
        settings.child_age = 19;
        assert!(validate_settings(&settings).is_err());
        settings.child_age = 18;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_validate_session_duration() {
        let mut settings = GateSettings::default();
        settings.session_duration_minutes = 0;
        assert!(validate_settings(&settings).is_err());
        settings.session_duration_minutes = 1441;
        assert!(validate_settings(&settings).is_err());
        settings.session_duration_minutes = 60;
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_validate_rejects_malformed_pin_hash() {
        let mut settings = GateSettings::default();
        settings.pin_hash = Some("not-a-hash".to_string());
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_empty_lists_are_allowed() {
        let settings = parse_settings("categories: []\nmath_operators: []\nlanguages: []\n").unwrap();
        assert!(settings.enabled_categories().is_empty());
        assert!(!settings.math_operator_enabled(MathOperator::Add));
    }

    #[test]
    fn test_verify_pin_with_hash() {
        let mut settings = GateSettings::default();
        settings.pin_hash = Some(PinAuth::hash_pin("4321").unwrap());
        assert!(settings.verify_pin("4321"));
        assert!(!settings.verify_pin("1234"));
    }

    #[test]
    fn test_authorize_change_without_pin() {
        let settings = GateSettings::default();
        assert!(authorize_change(&settings, None).is_ok());
        assert!(authorize_change(&settings, Some("9999")).is_ok());
    }

    #[test]
    fn test_authorize_change_requires_current_pin() {
        let mut settings = GateSettings::default();
        settings.pin_hash = Some(PinAuth::hash_pin("4321").unwrap());

        assert!(authorize_change(&settings, Some("4321")).is_ok());

        let err = authorize_change(&settings, None).unwrap_err();
        assert!(err.to_string().contains("PIN is set"));
        let err = authorize_change(&settings, Some("1234")).unwrap_err();
        assert!(err.to_string().contains("Incorrect"));
        assert!(authorize_change(&settings, Some("43210")).is_err());
    }

    #[test]
    fn test_load_or_default() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("settings.yaml");

        assert_eq!(
            load_settings_or_default(file.path()).unwrap(),
            GateSettings::default()
        );

        file.write_str("child_age: 12\n").unwrap();
        assert_eq!(load_settings_or_default(file.path()).unwrap().child_age, 12);

        file.write_str("child_age: 40\n").unwrap();
        assert!(load_settings_or_default(file.path()).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.child("nested").child("settings.yaml");

        let mut settings = GateSettings::default();
        settings.child_age = 10;
        settings.languages = vec![Language::French, Language::Hindi];
        save_settings(path.path(), &settings).unwrap();

        path.assert(predicate::path::exists());
        path.assert(predicate::str::contains("child_age: 10"));

        let loaded = load_settings(path.path()).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_store_defaults_when_missing() {
        let temp = assert_fs::TempDir::new().unwrap();
        let store = SettingsStore::open(temp.path().join("settings.yaml")).unwrap();
        assert_eq!(store.snapshot(), GateSettings::default());
        assert_eq!(store.reload_if_changed().unwrap(), None);
    }

    #[test]
    fn test_store_update_persists() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.path().join("settings.yaml");
        let store = SettingsStore::open(path.clone()).unwrap();

        let change = store.update(|s| s.session_duration_minutes = 30).unwrap();
        assert!(change.duration_changed);
        assert_eq!(store.session_duration_minutes(), 30);

        // Our own write is not reported as an external change
        assert_eq!(store.reload_if_changed().unwrap(), None);

        let reopened = SettingsStore::open(path).unwrap();
        assert_eq!(reopened.session_duration_minutes(), 30);
    }

    #[test]
    fn test_store_update_rejects_invalid() {
        let temp = assert_fs::TempDir::new().unwrap();
        let store = SettingsStore::open(temp.path().join("settings.yaml")).unwrap();

        assert!(store.update(|s| s.child_age = 1).is_err());
        assert_eq!(store.child_age(), 7);
    }

    #[test]
    fn test_store_reload_detects_external_change() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("settings.yaml");
        file.write_str("child_age: 6\n").unwrap();

        let store = SettingsStore::open(file.path().to_path_buf()).unwrap();
        assert_eq!(store.child_age(), 6);
        assert_eq!(store.reload_if_changed().unwrap(), None);

        file.write_str("child_age: 6\nsession_duration_minutes: 5\n").unwrap();
        let change = store.reload_if_changed().unwrap().unwrap();
        assert!(change.duration_changed);
        assert_eq!(store.session_duration_minutes(), 5);

        file.write_str("child_age: 9\nsession_duration_minutes: 5\n").unwrap();
        let change = store.reload_if_changed().unwrap().unwrap();
        assert!(!change.duration_changed);
        assert_eq!(store.child_age(), 9);
    }

    #[test]
    fn test_store_reload_keeps_old_settings_on_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("settings.yaml");
        file.write_str("child_age: 6\n").unwrap();

        let store = SettingsStore::open(file.path().to_path_buf()).unwrap();
        file.write_str("child_age: 40\n").unwrap();

        assert!(store.reload_if_changed().is_err());
        assert_eq!(store.child_age(), 6);
    }

    #[test]
    fn test_fingerprint_format() {
        let hash = fingerprint("child_age: 6\n");
        assert!(hash.starts_with("sha256:"));
        assert_eq!(hash.len(), "sha256:".len() + 64);
    }
}
