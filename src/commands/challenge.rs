use anyhow::{Context, Result};
use std::path::Path;

use crate::challenge::{Challenge, ChallengeCategory, ChallengeGenerator};
use crate::settings::{self, CHILD_AGE_RANGE, GateSettings};

/// Generate challenges with the configured settings, optionally overriding
/// the category and age
pub fn generate(
    settings: &GateSettings,
    category: Option<ChallengeCategory>,
    age: Option<u32>,
    count: usize,
) -> Result<Vec<Challenge>> {
    let mut settings = settings.clone();
    if let Some(age) = age {
        if !CHILD_AGE_RANGE.contains(&age) {
            anyhow::bail!(
                "Age must be between {} and {}",
                CHILD_AGE_RANGE.start(),
                CHILD_AGE_RANGE.end()
            );
        }
        settings.child_age = age;
    }

    let generator = ChallengeGenerator::builtin()?;
    let mut rng = rand::thread_rng();

    let challenges = (0..count)
        .map(|_| match category {
            Some(category) => generator.generate(category, settings.child_age, &settings),
            None => generator.generate_any(&settings, &mut rng),
        })
        .collect();

    Ok(challenges)
}

/// Print generated challenges
pub fn print_challenges(
    settings_path: &Path,
    category: Option<ChallengeCategory>,
    age: Option<u32>,
    count: usize,
    json: bool,
) -> Result<()> {
    let settings = settings::load_settings_or_default(settings_path)?;
    let challenges = generate(&settings, category, age, count)?;

    if json {
        let output =
            serde_json::to_string_pretty(&challenges).context("Failed to serialize challenges")?;
        println!("{}", output);
        return Ok(());
    }

    for (n, challenge) in challenges.iter().enumerate() {
        if n > 0 {
            println!();
        }
        println!("{}", challenge.question);
        for (i, option) in challenge.options.iter().enumerate() {
            let marker = if challenge.is_correct(i) { " ✓" } else { "" };
            println!("  {}) {}{}", i + 1, option, marker);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::OPTION_COUNT;

    #[test]
    fn test_generate_count() {
        let challenges = generate(&GateSettings::default(), None, None, 5).unwrap();
        assert_eq!(challenges.len(), 5);
        assert!(challenges.iter().all(|c| c.options.len() == OPTION_COUNT));
    }

    #[test]
    fn test_generate_category_override() {
        let challenges =
            generate(&GateSettings::default(), Some(ChallengeCategory::Patterns), Some(12), 3).unwrap();
        assert!(challenges.iter().all(|c| c.question.starts_with("Sequence: ")));
    }

    #[test]
    fn test_generate_rejects_bad_age() {
        assert!(generate(&GateSettings::default(), None, Some(40), 1).is_err());
    }

    #[test]
    fn test_challenges_serialize_to_json() {
        let challenges = generate(&GateSettings::default(), Some(ChallengeCategory::Math), None, 1).unwrap();
        let json = serde_json::to_value(&challenges).unwrap();
        assert_eq!(json[0]["options"].as_array().unwrap().len(), OPTION_COUNT);
        assert!(json[0]["correct_index"].as_u64().unwrap() < OPTION_COUNT as u64);
    }
}
