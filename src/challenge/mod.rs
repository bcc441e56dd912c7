//! Challenge generation for the unlock gate
//!
//! This module provides:
//! - Age-tagged question banks per text category
//! - Arithmetic and number-sequence puzzles with numeric distractors
//! - A generator that always yields a four-option multiple choice challenge

pub mod bank;
pub mod generator;
pub mod numeric;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use bank::Language;
pub use generator::ChallengeGenerator;
pub use numeric::MathOperator;

/// Number of options shown for every challenge
pub const OPTION_COUNT: usize = 4;

/// A multiple choice question ready to be displayed by the gate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Challenge {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Challenge {
    /// Build a challenge by placing the correct answer at a random slot
    /// among the shuffled distractors
    pub(crate) fn assemble<R: Rng + ?Sized>(
        question: String,
        correct: String,
        mut distractors: Vec<String>,
        rng: &mut R,
    ) -> Self {
        distractors.shuffle(rng);
        let correct_index = rng.gen_range(0..=distractors.len());
        distractors.insert(correct_index, correct);

        Self {
            question,
            options: distractors,
            correct_index,
        }
    }

    /// The option the child has to pick
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    /// Check a selected option index
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

/// Kind of challenge a parent can enable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeCategory {
    Math,
    Logic,
    Patterns,
    Vocabulary,
    GeneralKnowledge,
    Translation,
    Tricky,
}

impl ChallengeCategory {
    pub const ALL: [ChallengeCategory; 7] = [
        ChallengeCategory::Math,
        ChallengeCategory::Logic,
        ChallengeCategory::Patterns,
        ChallengeCategory::Vocabulary,
        ChallengeCategory::GeneralKnowledge,
        ChallengeCategory::Translation,
        ChallengeCategory::Tricky,
    ];

    /// Categories backed by a curated question bank
    pub fn uses_question_bank(self) -> bool {
        matches!(
            self,
            ChallengeCategory::Logic
                | ChallengeCategory::Vocabulary
                | ChallengeCategory::GeneralKnowledge
                | ChallengeCategory::Translation
                | ChallengeCategory::Tricky
        )
    }
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChallengeCategory::Math => "math",
            ChallengeCategory::Logic => "logic",
            ChallengeCategory::Patterns => "patterns",
            ChallengeCategory::Vocabulary => "vocabulary",
            ChallengeCategory::GeneralKnowledge => "general knowledge",
            ChallengeCategory::Translation => "translation",
            ChallengeCategory::Tricky => "tricky",
        };
        f.write_str(name)
    }
}
