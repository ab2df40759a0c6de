//! Reward-overlay auto-dismiss timer.
//!
//! When a wizard reaches its reward step the UI shows a one-time celebratory
//! overlay (confetti, sparkles) that expires on its own -- no user action
//! dismisses it. This is a wall-clock state, not a thread: the owner polls
//! [`Celebration::is_active`] and drops the value when it expires. If the
//! owning screen is torn down first, the pending expiry is simply never
//! observed, which is fine -- there is no cleanup invariant.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Confetti duration on lesson reward screens (ms).
pub const LESSON_REWARD_MS: u64 = 4_000;

/// Reward overlay duration after the daily check-in (ms).
pub const CHECKIN_REWARD_MS: u64 = 3_000;

/// A running celebratory overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    /// When the overlay appeared (ms since epoch).
    started_epoch_ms: u64,
    /// How long it stays up (ms).
    duration_ms: u64,
}

impl Celebration {
    /// Start an overlay now with the given duration.
    pub fn start(duration_ms: u64) -> Self {
        Self::start_at(Utc::now().timestamp_millis() as u64, duration_ms)
    }

    /// Start an overlay at an explicit instant (ms since epoch).
    pub fn start_at(started_epoch_ms: u64, duration_ms: u64) -> Self {
        Self {
            started_epoch_ms,
            duration_ms,
        }
    }

    /// Whether the overlay is still visible at `now_ms`.
    pub fn is_active(&self, now_ms: u64) -> bool {
        now_ms < self.started_epoch_ms + self.duration_ms
    }

    /// Milliseconds until the overlay expires (0 once expired).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        (self.started_epoch_ms + self.duration_ms).saturating_sub(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_until_duration_elapses() {
        let c = Celebration::start_at(1_000, CHECKIN_REWARD_MS);
        assert!(c.is_active(1_000));
        assert!(c.is_active(3_999));
        assert!(!c.is_active(4_000));
        assert!(!c.is_active(10_000));
    }

    #[test]
    fn test_remaining_saturates_at_zero() {
        let c = Celebration::start_at(0, LESSON_REWARD_MS);
        assert_eq!(c.remaining_ms(1_000), 3_000);
        assert_eq!(c.remaining_ms(9_000), 0);
    }
}
