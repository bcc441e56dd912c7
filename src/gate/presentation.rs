use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use super::actor::GateIntent;
use super::auth::{PinAuth, RateLimiter};
use super::machine::{GateEvent, GateMode};
use crate::challenge::{Challenge, ChallengeGenerator};
use crate::settings::SettingsProvider;

/// PIN attempts allowed per window
const PIN_MAX_ATTEMPTS: usize = 5;
const PIN_WINDOW_SECONDS: u64 = 60;

/// What the gate currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateContent {
    Challenge(Challenge),
    /// Learning mode is off; one confirmation unlocks
    SimpleUnlock,
    PinPad,
}

/// Result of a PIN entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOutcome {
    Accepted,
    Rejected,
}

/// Presentation side of the gate
///
/// Builds the content for each `Present` intent, checks answers and PINs, and
/// returns the outcome events to report back to the gate actor.
pub struct GateController {
    generator: ChallengeGenerator,
    settings: Arc<dyn SettingsProvider>,
    limiter: RateLimiter,
    rng: StdRng,
    content: Option<GateContent>,
}

impl GateController {
    pub fn new(generator: ChallengeGenerator, settings: Arc<dyn SettingsProvider>) -> Self {
        Self::with_rng(generator, settings, StdRng::from_entropy())
    }

    pub fn with_rng(
        generator: ChallengeGenerator,
        settings: Arc<dyn SettingsProvider>,
        rng: StdRng,
    ) -> Self {
        Self {
            generator,
            settings,
            limiter: RateLimiter::new(PIN_MAX_ATTEMPTS, PIN_WINDOW_SECONDS),
            rng,
            content: None,
        }
    }

    /// Currently displayed content, `None` when the gate is hidden
    pub fn content(&self) -> Option<&GateContent> {
        self.content.as_ref()
    }

    pub fn is_showing(&self) -> bool {
        self.content.is_some()
    }

    /// Apply an intent from the gate actor. Presenting again while shown
    /// rebuilds the content.
    pub fn apply(&mut self, intent: GateIntent) -> Option<&GateContent> {
        match intent {
            GateIntent::Present(GateMode::Pin) => {
                self.content = Some(GateContent::PinPad);
            }
            GateIntent::Present(GateMode::Challenge) => {
                self.content = Some(self.quiz_content());
            }
            GateIntent::Dismiss => {
                self.content = None;
            }
        }
        self.content.as_ref()
    }

    /// Handle a tapped option. A wrong answer replaces the challenge.
    pub fn answer(&mut self, index: usize) -> Result<GateEvent> {
        let Some(GateContent::Challenge(challenge)) = &self.content else {
            anyhow::bail!("No challenge is being shown");
        };

        if index >= challenge.options.len() {
            anyhow::bail!(
                "Option {} does not exist, choose 1 to {}",
                index + 1,
                challenge.options.len()
            );
        }

        if challenge.is_correct(index) {
            tracing::info!("Challenge solved");
            Ok(GateEvent::ChallengeSolvedCorrectly)
        } else {
            tracing::info!("Wrong answer, generating a new challenge");
            tracing::debug!(
                "Picked '{}', expected '{}'",
                challenge.options[index],
                challenge.correct_answer()
            );
            self.content = Some(self.quiz_content());
            Ok(GateEvent::WrongAnswerSelected)
        }
    }

    /// Confirm the plain unlock screen shown when learning mode is off
    pub fn confirm_unlock(&mut self) -> Result<GateEvent> {
        match self.content {
            Some(GateContent::SimpleUnlock) => Ok(GateEvent::ChallengeSolvedCorrectly),
            _ => anyhow::bail!("The unlock button is not being shown"),
        }
    }

    /// Check a PIN typed on the PIN pad
    pub fn enter_pin(&mut self, pin: &str) -> Result<PinOutcome> {
        if self.content != Some(GateContent::PinPad) {
            anyhow::bail!("The PIN pad is not being shown");
        }

        PinAuth::validate_pin(pin)?;

        if !self.limiter.is_allowed() {
            let wait = self
                .limiter
                .time_until_allowed()
                .map(|d| d.as_secs().max(1))
                .unwrap_or(1);
            anyhow::bail!("Too many PIN attempts, try again in {} seconds", wait);
        }

        if self.settings.verify_pin(pin) {
            tracing::info!("Parent PIN accepted");
            self.limiter.reset();
            Ok(PinOutcome::Accepted)
        } else {
            tracing::warn!("Incorrect PIN entered");
            Ok(PinOutcome::Rejected)
        }
    }

    /// Switch from the challenge to the PIN pad
    pub fn emergency(&mut self) -> Result<()> {
        match self.content {
            Some(GateContent::Challenge(_)) | Some(GateContent::SimpleUnlock) => {
                self.content = Some(GateContent::PinPad);
                Ok(())
            }
            Some(GateContent::PinPad) => Ok(()),
            None => anyhow::bail!("The gate is not being shown"),
        }
    }

    /// Leave the PIN pad for a fresh challenge
    pub fn back_to_quiz(&mut self) -> Result<()> {
        if self.content.is_none() {
            anyhow::bail!("The gate is not being shown");
        }
        self.content = Some(self.quiz_content());
        Ok(())
    }

    fn quiz_content(&mut self) -> GateContent {
        if !self.settings.is_learning_enabled() {
            return GateContent::SimpleUnlock;
        }

        let challenge = self
            .generator
            .generate_any(self.settings.as_ref(), &mut self.rng);
        GateContent::Challenge(challenge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::ChallengeCategory;
    use crate::settings::GateSettings;

    fn controller(settings: GateSettings) -> GateController {
        GateController::with_rng(
            ChallengeGenerator::builtin().unwrap(),
            Arc::new(settings),
            StdRng::seed_from_u64(99),
        )
    }

    fn shown_challenge(controller: &GateController) -> Challenge {
        match controller.content() {
            Some(GateContent::Challenge(challenge)) => challenge.clone(),
            other => panic!("expected a challenge, got {:?}", other),
        }
    }

    #[test]
    fn test_present_challenge() {
        let mut controller = controller(GateSettings::default());
        assert!(!controller.is_showing());

        controller.apply(GateIntent::Present(GateMode::Challenge));
        let challenge = shown_challenge(&controller);
        assert!(challenge.question.ends_with(" = ?"));
    }

    #[test]
    fn test_correct_answer_reports_solved() {
        let mut controller = controller(GateSettings::default());
        controller.apply(GateIntent::Present(GateMode::Challenge));

        let challenge = shown_challenge(&controller);
        let event = controller.answer(challenge.correct_index).unwrap();
        assert_eq!(event, GateEvent::ChallengeSolvedCorrectly);

        controller.apply(GateIntent::Dismiss);
        assert!(!controller.is_showing());
    }

    #[test]
    fn test_wrong_answer_regenerates() {
        let settings = GateSettings {
            categories: vec![ChallengeCategory::Tricky],
            ..GateSettings::default()
        };
        let mut controller = controller(settings);
        controller.apply(GateIntent::Present(GateMode::Challenge));

        let challenge = shown_challenge(&controller);
        let wrong = (challenge.correct_index + 1) % challenge.options.len();
        let event = controller.answer(wrong).unwrap();

        assert_eq!(event, GateEvent::WrongAnswerSelected);
        assert!(matches!(controller.content(), Some(GateContent::Challenge(_))));
    }

    #[test]
    fn test_answer_out_of_range() {
        let mut controller = controller(GateSettings::default());
        controller.apply(GateIntent::Present(GateMode::Challenge));
        assert!(controller.answer(4).is_err());
    }

    #[test]
    fn test_answer_without_gate_fails() {
        let mut controller = controller(GateSettings::default());
        assert!(controller.answer(0).is_err());
    }

    #[test]
    fn test_learning_off_shows_simple_unlock() {
        let settings = GateSettings {
            learning_enabled: false,
            ..GateSettings::default()
        };
        let mut controller = controller(settings);

        let content = controller.apply(GateIntent::Present(GateMode::Challenge));
        assert_eq!(content, Some(&GateContent::SimpleUnlock));
        assert_eq!(
            controller.confirm_unlock().unwrap(),
            GateEvent::ChallengeSolvedCorrectly
        );
    }

    #[test]
    fn test_forced_gate_opens_pin_pad() {
        let mut controller = controller(GateSettings::default());
        controller.apply(GateIntent::Present(GateMode::Challenge));

        let content = controller.apply(GateIntent::Present(GateMode::Pin));
        assert_eq!(content, Some(&GateContent::PinPad));
        assert!(controller.confirm_unlock().is_err());
    }

    #[test]
    fn test_pin_entry() {
        let settings = GateSettings {
            pin_hash: Some(PinAuth::hash_pin("1357").unwrap()),
            ..GateSettings::default()
        };
        let mut controller = controller(settings);
        controller.apply(GateIntent::Present(GateMode::Challenge));

        assert!(controller.enter_pin("1357").is_err());

        controller.emergency().unwrap();
        assert_eq!(controller.enter_pin("0000").unwrap(), PinOutcome::Rejected);
        assert!(controller.enter_pin("12").is_err());
        assert_eq!(controller.enter_pin("1357").unwrap(), PinOutcome::Accepted);
    }

    #[test]
    fn test_pin_attempts_are_rate_limited() {
        let settings = GateSettings {
            pin_hash: Some(PinAuth::hash_pin("1357").unwrap()),
            ..GateSettings::default()
        };
        let mut controller = controller(settings);
        controller.apply(GateIntent::Present(GateMode::Pin));

        for _ in 0..PIN_MAX_ATTEMPTS {
            assert_eq!(controller.enter_pin("9999").unwrap(), PinOutcome::Rejected);
        }
        assert!(controller.enter_pin("1357").is_err());
    }

    #[test]
    fn test_back_to_quiz() {
        let mut controller = controller(GateSettings::default());
        assert!(controller.back_to_quiz().is_err());

        controller.apply(GateIntent::Present(GateMode::Pin));
        controller.back_to_quiz().unwrap();
        shown_challenge(&controller);
    }
}
