use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::ChallengeCategory;

mod general_knowledge;
mod logic;
mod translation;
mod tricky;
mod vocabulary;

/// Target language of a translation question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    French,
    German,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Hindi,
    ];

    /// Language used when the parent has not enabled any
    pub const BASELINE: Language = Language::Hindi;
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Hindi => "Hindi",
        };
        f.write_str(name)
    }
}

/// One row of a question bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionItem {
    pub prompt: &'static str,
    pub correct_answer: &'static str,
    pub wrong_answers: [&'static str; 3],
    pub min_age: u32,
    pub language: Option<Language>,
}

impl QuestionItem {
    pub const fn new(
        prompt: &'static str,
        correct_answer: &'static str,
        wrong_answers: [&'static str; 3],
        min_age: u32,
    ) -> Self {
        Self {
            prompt,
            correct_answer,
            wrong_answers,
            min_age,
            language: None,
        }
    }

    pub const fn translation(
        prompt: &'static str,
        correct_answer: &'static str,
        wrong_answers: [&'static str; 3],
        min_age: u32,
        language: Language,
    ) -> Self {
        Self {
            prompt,
            correct_answer,
            wrong_answers,
            min_age,
            language: Some(language),
        }
    }

    /// Item is at or below the child's level and at most two years below it
    pub fn fits_age_window(&self, age: u32) -> bool {
        age >= self.min_age && age - self.min_age <= 2
    }

    fn validate(&self, category: ChallengeCategory) -> Result<()> {
        let distinct: HashSet<&str> = self.wrong_answers.iter().copied().collect();
        if distinct.len() != self.wrong_answers.len() {
            anyhow::bail!("Duplicate wrong answers in {} question '{}'", category, self.prompt);
        }

        if distinct.contains(self.correct_answer) {
            anyhow::bail!(
                "Correct answer '{}' is also listed as wrong in {} question '{}'",
                self.correct_answer,
                category,
                self.prompt
            );
        }

        match (category, self.language) {
            (ChallengeCategory::Translation, None) => {
                anyhow::bail!("Translation question '{}' has no language", self.prompt)
            }
            (ChallengeCategory::Translation, Some(_)) | (_, None) => Ok(()),
            (_, Some(lang)) => anyhow::bail!(
                "{} question '{}' must not carry a language tag ({})",
                category,
                self.prompt,
                lang
            ),
        }
    }
}

/// Item lists for every bank-backed category
#[derive(Debug, Clone, Default)]
pub struct TextPools {
    pub logic: Vec<QuestionItem>,
    pub vocabulary: Vec<QuestionItem>,
    pub general_knowledge: Vec<QuestionItem>,
    pub translation: Vec<QuestionItem>,
    pub tricky: Vec<QuestionItem>,
}

/// Immutable, validated set of question pools
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pools: TextPools,
}

impl QuestionBank {
    /// Validate pools and build a bank
    pub fn new(pools: TextPools) -> Result<Self> {
        let bank = Self { pools };

        for category in ChallengeCategory::ALL {
            if !category.uses_question_bank() {
                continue;
            }

            let items = bank.items(category);
            if items.is_empty() {
                anyhow::bail!("Question bank for {} is empty", category);
            }

            for item in items {
                item.validate(category)?;
            }
        }

        if !bank
            .pools
            .translation
            .iter()
            .any(|item| item.language == Some(Language::BASELINE))
        {
            anyhow::bail!(
                "Translation bank has no {} questions to fall back on",
                Language::BASELINE
            );
        }

        Ok(bank)
    }

    /// The curated questions shipped with the gate
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_pools()).context("Built-in question bank is invalid")
    }

    /// Items for a category (empty for generated categories)
    pub fn items(&self, category: ChallengeCategory) -> &[QuestionItem] {
        match category {
            ChallengeCategory::Logic => &self.pools.logic,
            ChallengeCategory::Vocabulary => &self.pools.vocabulary,
            ChallengeCategory::GeneralKnowledge => &self.pools.general_knowledge,
            ChallengeCategory::Translation => &self.pools.translation,
            ChallengeCategory::Tricky => &self.pools.tricky,
            ChallengeCategory::Math | ChallengeCategory::Patterns => &[],
        }
    }
}

/// Pick an item suited to `age`.
///
/// Items within two years below the child's age are preferred, then any item
/// at or below the child's age, then the hardest items in the list. Returns
/// `None` only when `candidates` is empty.
pub fn select_for_age<'a, R: Rng + ?Sized>(
    candidates: &[&'a QuestionItem],
    age: u32,
    rng: &mut R,
) -> Option<&'a QuestionItem> {
    let in_window: Vec<&QuestionItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.fits_age_window(age))
        .collect();
    if let Some(item) = in_window.choose(rng) {
        return Some(*item);
    }

    let at_or_below: Vec<&QuestionItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.min_age <= age)
        .collect();
    if let Some(item) = at_or_below.choose(rng) {
        return Some(*item);
    }

    let hardest = candidates.iter().map(|item| item.min_age).max()?;
    let top: Vec<&QuestionItem> = candidates
        .iter()
        .copied()
        .filter(|item| item.min_age == hardest)
        .collect();
    top.choose(rng).copied()
}

fn builtin_pools() -> TextPools {
    TextPools {
        logic: logic::ITEMS.to_vec(),
        vocabulary: vocabulary::ITEMS.to_vec(),
        general_knowledge: general_knowledge::ITEMS.to_vec(),
        translation: translation::ITEMS.to_vec(),
        tricky: tricky::ITEMS.to_vec(),
    }
}
