use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Whether the device is currently usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GatePhase {
    Locked,
    Unlocked,
}

/// State owned by the session state machine
///
/// `expires_at` is set exactly when the phase is `Unlocked`, and
/// `timer_generation` identifies the one armed expiry timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateSession {
    phase: GatePhase,
    expires_at: Option<DateTime<Utc>>,
    pending_screen_off: bool,
    timer_generation: u64,
    session_id: Option<Uuid>,
}

impl GateSession {
    /// A fresh session: locked, and the first unlock must show the gate
    pub fn new() -> Self {
        Self {
            phase: GatePhase::Locked,
            expires_at: None,
            pending_screen_off: true,
            timer_generation: 0,
            session_id: None,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_unlocked(&self) -> bool {
        self.phase == GatePhase::Unlocked
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn pending_screen_off(&self) -> bool {
        self.pending_screen_off
    }

    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    /// Whether the next unlock has to go through the gate
    pub fn gate_required(&self, now: DateTime<Utc>) -> bool {
        if self.pending_screen_off {
            return true;
        }

        match (self.phase, self.expires_at) {
            (GatePhase::Unlocked, Some(expires_at)) => now > expires_at,
            _ => true,
        }
    }

    /// Time left in the current session
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        match (self.phase, self.expires_at) {
            (GatePhase::Unlocked, Some(expires_at)) if expires_at > now => Some(expires_at - now),
            (GatePhase::Unlocked, Some(_)) => Some(chrono::Duration::zero()),
            _ => None,
        }
    }

    pub(super) fn set_pending_screen_off(&mut self, pending: bool) {
        self.pending_screen_off = pending;
    }

    /// Start a new session (or extend the current one) ending at `expires_at`.
    /// Returns the generation of the timer to arm.
    pub(super) fn unlock_until(&mut self, expires_at: DateTime<Utc>) -> u64 {
        if self.phase == GatePhase::Locked {
            self.session_id = Some(Uuid::new_v4());
        }

        self.phase = GatePhase::Unlocked;
        self.expires_at = Some(expires_at);
        self.pending_screen_off = false;
        self.timer_generation += 1;
        self.timer_generation
    }

    /// Lock and invalidate any armed timer
    pub(super) fn lock(&mut self) {
        self.phase = GatePhase::Locked;
        self.expires_at = None;
        self.session_id = None;
        self.timer_generation += 1;
    }
}

impl Default for GateSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_session_requires_gate() {
        let session = GateSession::new();
        assert_eq!(session.phase(), GatePhase::Locked);
        assert!(session.pending_screen_off());
        assert!(session.expires_at().is_none());
        assert!(session.gate_required(Utc::now()));
    }

    #[test]
    fn test_unlocked_session_expires() {
        let now = Utc::now();
        let mut session = GateSession::new();
        session.unlock_until(now + Duration::minutes(15));

        assert!(session.is_unlocked());
        assert!(session.session_id().is_some());
        assert!(!session.gate_required(now));
        assert!(!session.gate_required(now + Duration::minutes(15)));
        assert!(session.gate_required(now + Duration::minutes(15) + Duration::seconds(1)));
        assert_eq!(session.remaining(now), Some(Duration::minutes(15)));
    }

    #[test]
    fn test_pending_screen_off_forces_gate() {
        let now = Utc::now();
        let mut session = GateSession::new();
        session.unlock_until(now + Duration::minutes(15));
        session.set_pending_screen_off(true);
        assert!(session.gate_required(now));
    }

    #[test]
    fn test_generation_advances() {
        let now = Utc::now();
        let mut session = GateSession::new();

        let first = session.unlock_until(now + Duration::minutes(1));
        let id = session.session_id();
        let second = session.unlock_until(now + Duration::minutes(2));
        assert!(second > first);
        assert_eq!(session.session_id(), id);

        session.lock();
        assert!(session.timer_generation() > second);
        assert!(session.expires_at().is_none());
        assert!(session.remaining(now).is_none());
    }
}
