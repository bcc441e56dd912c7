use rand::Rng;
use rand::seq::SliceRandom;

use super::bank::{self, Language, QuestionBank, QuestionItem};
use super::numeric::{self, MathOperator, NumericProblem};
use super::{Challenge, ChallengeCategory};
use crate::settings::SettingsProvider;

/// Builds challenges for the gate
///
/// Generation never fails. Missing configuration or an age with no matching
/// question degrades to a default instead.
#[derive(Debug, Clone)]
pub struct ChallengeGenerator {
    bank: QuestionBank,
}

impl ChallengeGenerator {
    pub fn new(bank: QuestionBank) -> Self {
        Self { bank }
    }

    /// Generator over the built-in question bank
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(QuestionBank::builtin()?))
    }

    /// Generate a challenge using the thread-local random source
    pub fn generate(
        &self,
        category: ChallengeCategory,
        age: u32,
        settings: &dyn SettingsProvider,
    ) -> Challenge {
        self.generate_with_rng(category, age, settings, &mut rand::thread_rng())
    }

    /// Generate a challenge from a random enabled category, Math if none
    pub fn generate_any<R: Rng + ?Sized>(
        &self,
        settings: &dyn SettingsProvider,
        rng: &mut R,
    ) -> Challenge {
        let category = settings
            .enabled_categories()
            .choose(rng)
            .copied()
            .unwrap_or(ChallengeCategory::Math);

        self.generate_with_rng(category, settings.child_age(), settings, rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        category: ChallengeCategory,
        age: u32,
        settings: &dyn SettingsProvider,
        rng: &mut R,
    ) -> Challenge {
        match category {
            ChallengeCategory::Math => self.math(age, settings, rng),
            ChallengeCategory::Patterns => numeric_challenge(numeric::sequence_problem(age, rng), age, rng),
            ChallengeCategory::Logic => {
                if rng.gen_bool(0.5) {
                    numeric_challenge(numeric::sequence_problem(age, rng), age, rng)
                } else {
                    self.from_bank(category, age, settings, rng)
                }
            }
            ChallengeCategory::Vocabulary
            | ChallengeCategory::GeneralKnowledge
            | ChallengeCategory::Tricky => self.from_bank(category, age, settings, rng),
            ChallengeCategory::Translation => self.translation(age, settings, rng),
        }
    }

    fn math<R: Rng + ?Sized>(
        &self,
        age: u32,
        settings: &dyn SettingsProvider,
        rng: &mut R,
    ) -> Challenge {
        let op = enabled_operators(settings)
            .choose(rng)
            .copied()
            .unwrap_or(MathOperator::Add);

        numeric_challenge(numeric::math_problem(op, age, rng), age, rng)
    }

    fn from_bank<R: Rng + ?Sized>(
        &self,
        category: ChallengeCategory,
        age: u32,
        settings: &dyn SettingsProvider,
        rng: &mut R,
    ) -> Challenge {
        let candidates: Vec<&QuestionItem> = self.bank.items(category).iter().collect();

        match bank::select_for_age(&candidates, age, rng) {
            Some(item) => text_challenge(item, rng),
            None => {
                tracing::warn!("No {} questions available, using math instead", category);
                self.math(age, settings, rng)
            }
        }
    }

    fn translation<R: Rng + ?Sized>(
        &self,
        age: u32,
        settings: &dyn SettingsProvider,
        rng: &mut R,
    ) -> Challenge {
        let languages = enabled_languages(settings);
        let items = self.bank.items(ChallengeCategory::Translation);

        let picked = bank::select_for_age(&in_languages(items, &languages), age, rng).or_else(|| {
            tracing::debug!(
                "No translation questions for {:?}, using {}",
                languages,
                Language::BASELINE
            );
            bank::select_for_age(&in_languages(items, &[Language::BASELINE]), age, rng)
        });

        match picked {
            Some(item) => text_challenge(item, rng),
            None => {
                tracing::warn!("No translation questions available, using math instead");
                self.math(age, settings, rng)
            }
        }
    }
}

/// Operators the parent enabled, or addition alone when none are
pub fn enabled_operators(settings: &dyn SettingsProvider) -> Vec<MathOperator> {
    let ops: Vec<MathOperator> = MathOperator::ALL
        .into_iter()
        .filter(|op| settings.math_operator_enabled(*op))
        .collect();

    if ops.is_empty() {
        vec![MathOperator::Add]
    } else {
        ops
    }
}

/// Languages the parent enabled, or the baseline language when none are
pub fn enabled_languages(settings: &dyn SettingsProvider) -> Vec<Language> {
    let langs: Vec<Language> = Language::ALL
        .into_iter()
        .filter(|lang| settings.language_enabled(*lang))
        .collect();

    if langs.is_empty() {
        vec![Language::BASELINE]
    } else {
        langs
    }
}

fn in_languages<'a>(items: &'a [QuestionItem], langs: &[Language]) -> Vec<&'a QuestionItem> {
    items
        .iter()
        .filter(|item| item.language.is_some_and(|lang| langs.contains(&lang)))
        .collect()
}

fn numeric_challenge<R: Rng + ?Sized>(problem: NumericProblem, age: u32, rng: &mut R) -> Challenge {
    let wrong = numeric::numeric_distractors(problem.answer, numeric::distractor_variance(age), rng);

    Challenge::assemble(
        problem.question,
        problem.answer.to_string(),
        wrong.into_iter().map(|v| v.to_string()).collect(),
        rng,
    )
}

fn text_challenge<R: Rng + ?Sized>(item: &QuestionItem, rng: &mut R) -> Challenge {
    Challenge::assemble(
        item.prompt.to_string(),
        item.correct_answer.to_string(),
        item.wrong_answers.iter().map(|w| w.to_string()).collect(),
        rng,
    )
}
