use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use super::session::{GatePhase, GateSession};
use crate::settings::SettingsProvider;

/// Input to the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    ScreenOff,
    ScreenOn { keyguard_secure: bool },
    UserPresent,
    /// Raised by uninstall protection; opens the gate on the PIN pad
    ExternalForceGateRequest,
    ChallengeSolvedCorrectly,
    WrongAnswerSelected,
    PinVerified,
    ExpiryTimerFired { generation: u64 },
    SessionDurationChanged,
}

/// What the gate shows first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateMode {
    Challenge,
    Pin,
}

/// Side effect requested by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEffect {
    Present(GateMode),
    Dismiss,
    /// Replace any armed expiry timer with one firing at `deadline`
    ArmTimer {
        deadline: DateTime<Utc>,
        generation: u64,
    },
    CancelTimer,
}

/// Decides when the gate is shown from device signals and gate outcomes
///
/// Pure: it never renders or sleeps, it only returns effects for the caller
/// to carry out.
pub struct SessionStateMachine {
    session: GateSession,
}

impl SessionStateMachine {
    pub fn new(session: GateSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GateSession {
        &self.session
    }

    /// Process one event
    ///
    /// Fails only when the session deadline cannot be computed, in which case
    /// the session is left unchanged.
    pub fn handle(
        &mut self,
        event: GateEvent,
        now: DateTime<Utc>,
        settings: &dyn SettingsProvider,
    ) -> Result<Vec<GateEffect>> {
        let effects = match event {
            GateEvent::ScreenOff => {
                let was_unlocked = self.session.is_unlocked();
                self.lock("screen off");
                self.session.set_pending_screen_off(true);

                if was_unlocked {
                    vec![GateEffect::CancelTimer]
                } else {
                    Vec::new()
                }
            }

            GateEvent::ScreenOn { keyguard_secure: true } => {
                tracing::debug!("Screen on behind secure keyguard, waiting for user present");
                Vec::new()
            }

            GateEvent::ScreenOn { keyguard_secure: false } | GateEvent::UserPresent => {
                self.present_if_required(now)
            }

            GateEvent::ExternalForceGateRequest => {
                tracing::info!("Forced gate requested");
                let mut effects = Vec::new();
                if self.session.is_unlocked() {
                    self.lock("forced gate");
                    effects.push(GateEffect::CancelTimer);
                }
                effects.push(GateEffect::Present(GateMode::Pin));
                effects
            }

            GateEvent::ChallengeSolvedCorrectly | GateEvent::PinVerified => {
                if self.session.is_unlocked() {
                    tracing::debug!("Ignoring {:?}, session already unlocked", event);
                    Vec::new()
                } else {
                    self.start_session(now, settings, event)?
                }
            }

            GateEvent::WrongAnswerSelected => {
                tracing::debug!("Wrong answer selected");
                Vec::new()
            }

            GateEvent::ExpiryTimerFired { generation } => {
                if self.session.is_unlocked() && generation == self.session.timer_generation() {
                    self.session.set_pending_screen_off(false);
                    self.lock("session expired");
                    vec![GateEffect::Present(GateMode::Challenge)]
                } else {
                    tracing::debug!("Ignoring stale expiry timer (generation {})", generation);
                    Vec::new()
                }
            }

            GateEvent::SessionDurationChanged => {
                if self.session.is_unlocked() {
                    let minutes = settings.session_duration_minutes();
                    let deadline = session_deadline(now, minutes)?;
                    let generation = self.session.unlock_until(deadline);
                    tracing::info!(
                        "Session duration changed to {} minutes, now expires at {}",
                        minutes,
                        deadline.format("%H:%M:%S")
                    );
                    vec![
                        GateEffect::CancelTimer,
                        GateEffect::ArmTimer {
                            deadline,
                            generation,
                        },
                    ]
                } else {
                    Vec::new()
                }
            }
        };

        Ok(effects)
    }

    fn present_if_required(&mut self, now: DateTime<Utc>) -> Vec<GateEffect> {
        if !self.session.gate_required(now) {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if self.session.is_unlocked() {
            self.lock("session expired before timer fired");
            effects.push(GateEffect::CancelTimer);
        }
        effects.push(GateEffect::Present(GateMode::Challenge));
        effects
    }

    fn start_session(
        &mut self,
        now: DateTime<Utc>,
        settings: &dyn SettingsProvider,
        event: GateEvent,
    ) -> Result<Vec<GateEffect>> {
        let minutes = settings.session_duration_minutes();
        let deadline = session_deadline(now, minutes)?;
        let generation = self.session.unlock_until(deadline);

        tracing::info!(
            session = ?self.session.session_id(),
            "Gate passed ({:?}), unlocked for {} minutes",
            event,
            minutes
        );

        Ok(vec![
            GateEffect::Dismiss,
            GateEffect::ArmTimer {
                deadline,
                generation,
            },
        ])
    }

    fn lock(&mut self, reason: &str) {
        if self.session.phase() == GatePhase::Unlocked {
            tracing::info!(session = ?self.session.session_id(), "Locking: {}", reason);
        }
        self.session.lock();
    }
}

/// End of a session that starts at `now`
pub fn session_deadline(now: DateTime<Utc>, minutes: u32) -> Result<DateTime<Utc>> {
    if minutes == 0 {
        anyhow::bail!("Session duration must be at least one minute");
    }

    let span = chrono::Duration::try_minutes(i64::from(minutes))
        .with_context(|| format!("Session duration of {} minutes is out of range", minutes))?;

    now.checked_add_signed(span)
        .with_context(|| format!("Session of {} minutes would end past the supported date range", minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GateSettings;
    use chrono::Duration;

    fn machine() -> SessionStateMachine {
        SessionStateMachine::new(GateSession::new())
    }

    fn settings(minutes: u32) -> GateSettings {
        GateSettings {
            session_duration_minutes: minutes,
            ..GateSettings::default()
        }
    }

    fn armed(effects: &[GateEffect]) -> Option<(DateTime<Utc>, u64)> {
        effects.iter().find_map(|effect| match effect {
            GateEffect::ArmTimer {
                deadline,
                generation,
            } => Some((*deadline, *generation)),
            _ => None,
        })
    }

    fn unlock(machine: &mut SessionStateMachine, now: DateTime<Utc>, settings: &GateSettings) -> u64 {
        let effects = machine
            .handle(GateEvent::ChallengeSolvedCorrectly, now, settings)
            .unwrap();
        armed(&effects).unwrap().1
    }

    #[test]
    fn test_first_unlock_shows_gate() {
        let mut machine = machine();
        let effects = machine
            .handle(GateEvent::UserPresent, Utc::now(), &settings(15))
            .unwrap();
        assert_eq!(effects, vec![GateEffect::Present(GateMode::Challenge)]);
    }

    #[test]
    fn test_solved_challenge_unlocks_for_session_duration() {
        let mut machine = machine();
        let now = Utc::now();

        let effects = machine
            .handle(GateEvent::ChallengeSolvedCorrectly, now, &settings(15))
            .unwrap();

        assert_eq!(effects[0], GateEffect::Dismiss);
        let (deadline, generation) = armed(&effects).unwrap();
        assert_eq!(deadline, now + Duration::minutes(15));
        assert_eq!(generation, machine.session().timer_generation());
        assert!(machine.session().is_unlocked());
        assert!(!machine.session().pending_screen_off());
    }

    #[test]
    fn test_pin_verified_unlocks() {
        let mut machine = machine();
        let effects = machine
            .handle(GateEvent::PinVerified, Utc::now(), &settings(30))
            .unwrap();
        assert!(armed(&effects).is_some());
        assert!(machine.session().is_unlocked());
    }

    #[test]
    fn test_user_present_during_session_is_noop() {
        let mut machine = machine();
        let now = Utc::now();
        unlock(&mut machine, now, &settings(15));

        let effects = machine
            .handle(GateEvent::UserPresent, now + Duration::minutes(5), &settings(15))
            .unwrap();
        assert!(effects.is_empty());
        assert!(machine.session().is_unlocked());
    }

    #[test]
    fn test_screen_off_cancels_timer_and_forces_gate() {
        let mut machine = machine();
        let now = Utc::now();
        unlock(&mut machine, now, &settings(15));

        let effects = machine
            .handle(GateEvent::ScreenOff, now + Duration::minutes(1), &settings(15))
            .unwrap();
        assert_eq!(effects, vec![GateEffect::CancelTimer]);
        assert!(machine.session().pending_screen_off());
        assert_eq!(machine.session().phase(), GatePhase::Locked);

        let effects = machine
            .handle(GateEvent::UserPresent, now + Duration::minutes(2), &settings(15))
            .unwrap();
        assert_eq!(effects, vec![GateEffect::Present(GateMode::Challenge)]);
    }

    #[test]
    fn test_screen_on_without_keyguard_presents_immediately() {
        let mut machine = machine();
        let now = Utc::now();
        unlock(&mut machine, now, &settings(15));
        machine.handle(GateEvent::ScreenOff, now, &settings(15)).unwrap();

        let effects = machine
            .handle(GateEvent::ScreenOn { keyguard_secure: false }, now, &settings(15))
            .unwrap();
        assert_eq!(effects, vec![GateEffect::Present(GateMode::Challenge)]);
    }

    #[test]
    fn test_screen_on_with_keyguard_waits_for_user_present() {
        let mut machine = machine();
        let now = Utc::now();
        machine.handle(GateEvent::ScreenOff, now, &settings(15)).unwrap();

        let effects = machine
            .handle(GateEvent::ScreenOn { keyguard_secure: true }, now, &settings(15))
            .unwrap();
        assert!(effects.is_empty());

        let effects = machine.handle(GateEvent::UserPresent, now, &settings(15)).unwrap();
        assert_eq!(effects, vec![GateEffect::Present(GateMode::Challenge)]);
    }

    #[test]
    fn test_expiry_timer_locks_and_presents() {
        let mut machine = machine();
        let now = Utc::now();
        let generation = unlock(&mut machine, now, &settings(15));

        let effects = machine
            .handle(
                GateEvent::ExpiryTimerFired { generation },
                now + Duration::minutes(15),
                &settings(15),
            )
            .unwrap();
        assert_eq!(effects, vec![GateEffect::Present(GateMode::Challenge)]);
        assert_eq!(machine.session().phase(), GatePhase::Locked);
        assert!(!machine.session().pending_screen_off());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut machine = machine();
        let now = Utc::now();
        let first = unlock(&mut machine, now, &settings(15));

        machine.handle(GateEvent::ScreenOff, now, &settings(15)).unwrap();
        unlock(&mut machine, now, &settings(15));

        let effects = machine
            .handle(GateEvent::ExpiryTimerFired { generation: first }, now, &settings(15))
            .unwrap();
        assert!(effects.is_empty());
        assert!(machine.session().is_unlocked());
    }

    #[test]
    fn test_timer_after_lock_is_ignored() {
        let mut machine = machine();
        let now = Utc::now();
        let generation = unlock(&mut machine, now, &settings(15));
        machine.handle(GateEvent::ScreenOff, now, &settings(15)).unwrap();

        let effects = machine
            .handle(GateEvent::ExpiryTimerFired { generation }, now, &settings(15))
            .unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn test_user_present_after_deadline_locks() {
        let mut machine = machine();
        let now = Utc::now();
        unlock(&mut machine, now, &settings(15));

        let effects = machine
            .handle(GateEvent::UserPresent, now + Duration::minutes(16), &settings(15))
            .unwrap();
        assert_eq!(
            effects,
            vec![GateEffect::CancelTimer, GateEffect::Present(GateMode::Challenge)]
        );
        assert_eq!(machine.session().phase(), GatePhase::Locked);
    }

    #[test]
    fn test_duration_change_reschedules_from_now() {
        let mut machine = machine();
        let start = Utc::now();
        let first = unlock(&mut machine, start, &settings(15));

        let later = start + Duration::minutes(10);
        let effects = machine
            .handle(GateEvent::SessionDurationChanged, later, &settings(30))
            .unwrap();

        assert_eq!(effects[0], GateEffect::CancelTimer);
        let (deadline, generation) = armed(&effects).unwrap();
        assert_eq!(deadline, later + Duration::minutes(30));
        assert!(generation > first);
        assert_eq!(machine.session().expires_at(), Some(deadline));

        let effects = machine
            .handle(GateEvent::ExpiryTimerFired { generation: first }, later, &settings(30))
            .unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn test_duration_change_while_locked_is_noop() {
        let mut machine = machine();
        let effects = machine
            .handle(GateEvent::SessionDurationChanged, Utc::now(), &settings(30))
            .unwrap();
        assert!(effects.is_empty());
    }

    #[test]
    fn test_force_request_while_locked_presents_pin() {
        let mut machine = machine();
        let effects = machine
            .handle(GateEvent::ExternalForceGateRequest, Utc::now(), &settings(15))
            .unwrap();
        assert_eq!(effects, vec![GateEffect::Present(GateMode::Pin)]);
    }

    #[test]
    fn test_force_request_while_unlocked_locks() {
        let mut machine = machine();
        let now = Utc::now();
        unlock(&mut machine, now, &settings(15));

        let effects = machine
            .handle(GateEvent::ExternalForceGateRequest, now, &settings(15))
            .unwrap();
        assert_eq!(
            effects,
            vec![GateEffect::CancelTimer, GateEffect::Present(GateMode::Pin)]
        );
        assert_eq!(machine.session().phase(), GatePhase::Locked);
    }

    #[test]
    fn test_duplicate_solve_is_ignored() {
        let mut machine = machine();
        let now = Utc::now();
        unlock(&mut machine, now, &settings(15));
        let expires = machine.session().expires_at();

        let effects = machine
            .handle(GateEvent::ChallengeSolvedCorrectly, now + Duration::minutes(3), &settings(15))
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(machine.session().expires_at(), expires);
    }

    #[test]
    fn test_wrong_answer_has_no_transition() {
        let mut machine = machine();
        let effects = machine
            .handle(GateEvent::WrongAnswerSelected, Utc::now(), &settings(15))
            .unwrap();
        assert!(effects.is_empty());
        assert_eq!(machine.session().phase(), GatePhase::Locked);
    }

    #[test]
    fn test_zero_duration_fails_and_stays_locked() {
        let mut machine = machine();
        let result = machine.handle(GateEvent::ChallengeSolvedCorrectly, Utc::now(), &settings(0));
        assert!(result.is_err());
        assert_eq!(machine.session().phase(), GatePhase::Locked);
    }

    #[test]
    fn test_session_deadline_overflow() {
        assert!(session_deadline(DateTime::<Utc>::MAX_UTC, 1).is_err());
        assert!(session_deadline(Utc::now(), 0).is_err());
    }
}
