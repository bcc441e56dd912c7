use anyhow::Result;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::time::{Duration, Instant};

/// Number of digits in a parent PIN
pub const PIN_LENGTH: usize = 4;

/// Parent PIN authentication
pub struct PinAuth;

impl PinAuth {
    /// Check that a PIN is exactly four ASCII digits
    pub fn validate_pin(pin: &str) -> Result<()> {
        if pin.len() != PIN_LENGTH || !pin.bytes().all(|b| b.is_ascii_digit()) {
            anyhow::bail!("PIN must be exactly {} digits", PIN_LENGTH);
        }
        Ok(())
    }

    /// Hash a PIN using Argon2id
    pub fn hash_pin(pin: &str) -> Result<String> {
        Self::validate_pin(pin)?;

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!("Failed to hash PIN: {}", e))?
            .to_string();

        Ok(hash)
    }

    /// Verify a PIN against a stored hash
    pub fn verify_pin(pin: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| anyhow::anyhow!("Failed to parse PIN hash: {}", e))?;

        Ok(Argon2::default()
            .verify_password(pin.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Check that a stored hash is in PHC string format
    pub fn check_hash(hash: &str) -> Result<()> {
        PasswordHash::new(hash).map_err(|e| anyhow::anyhow!("Malformed PIN hash: {}", e))?;
        Ok(())
    }
}

/// Sliding-window limiter for PIN attempts
pub struct RateLimiter {
    attempts: Vec<Instant>,
    max_attempts: usize,
    window_duration: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window_seconds: u64) -> Self {
        Self {
            attempts: Vec::new(),
            max_attempts,
            window_duration: Duration::from_secs(window_seconds),
        }
    }

    /// Record an attempt if one is allowed right now
    pub fn is_allowed(&mut self) -> bool {
        self.is_allowed_at(Instant::now())
    }

    fn is_allowed_at(&mut self, now: Instant) -> bool {
        self.attempts
            .retain(|&attempt| now.duration_since(attempt) < self.window_duration);

        if self.attempts.len() < self.max_attempts {
            self.attempts.push(now);
            true
        } else {
            false
        }
    }

    /// Time until the next attempt is allowed
    pub fn time_until_allowed(&self) -> Option<Duration> {
        if self.attempts.len() < self.max_attempts {
            return None;
        }

        let oldest = self.attempts.first()?;
        let elapsed = Instant::now().duration_since(*oldest);

        if elapsed < self.window_duration {
            Some(self.window_duration - elapsed)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.attempts.clear();
    }
}
