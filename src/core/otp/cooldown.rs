//! Resend cool-down bookkeeping
//!
//! The remaining time is always derived from the absolute timestamp of the
//! last dispatch, so a reloaded page resumes where the previous one stopped.

/// Cool-down between two OTP dispatches
pub const RESEND_COOLDOWN_SECS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendCooldown {
    remaining_secs: u32,
    last_sent_at_ms: i64,
}

/// What a single timer tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; seconds left
    Running(u32),
    /// This tick brought the countdown to zero
    Elapsed,
    /// Countdown was already at zero
    Idle,
}

/// Seconds left in the cool-down window started at `last_sent_at_ms`
pub fn remaining_after(last_sent_at_ms: i64, now_ms: i64) -> u32 {
    let elapsed_secs = now_ms.saturating_sub(last_sent_at_ms).max(0) / 1000;
    (i64::from(RESEND_COOLDOWN_SECS) - elapsed_secs).max(0) as u32
}

impl ResendCooldown {
    /// Resume from a dispatch timestamp
    pub fn resume(last_sent_at_ms: i64, now_ms: i64) -> Self {
        Self {
            remaining_secs: remaining_after(last_sent_at_ms, now_ms),
            last_sent_at_ms,
        }
    }

    /// Cool-down for a code dispatched at `now_ms`
    pub fn started_at(now_ms: i64) -> Self {
        Self {
            remaining_secs: RESEND_COOLDOWN_SECS,
            last_sent_at_ms: now_ms,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn last_sent_at_ms(&self) -> i64 {
        self.last_sent_at_ms
    }

    pub fn can_resend(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Recompute the countdown from the wall clock. A throttled timer that
    /// fires late still lands on the right value.
    pub fn tick(&mut self, now_ms: i64) -> Tick {
        if self.remaining_secs == 0 {
            return Tick::Idle;
        }
        self.remaining_secs = remaining_after(self.last_sent_at_ms, now_ms);
        match self.remaining_secs {
            0 => Tick::Elapsed,
            n => Tick::Running(n),
        }
    }

    /// Seconds still to wait according to the wall clock, or `None` when a
    /// resend is allowed. Independent of the in-memory counter, which can be
    /// stale after the tab was suspended.
    pub fn wait_required(&self, now_ms: i64) -> Option<u32> {
        match remaining_after(self.last_sent_at_ms, now_ms) {
            0 => None,
            n => Some(n),
        }
    }

    pub fn restart(&mut self, now_ms: i64) {
        *self = Self::started_at(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_resume_mid_window() {
        let cooldown = ResendCooldown::resume(NOW - 45_000, NOW);
        assert_eq!(cooldown.remaining_secs(), 15);
        assert!(!cooldown.can_resend());
    }

    #[test]
    fn test_resume_after_window() {
        let cooldown = ResendCooldown::resume(NOW - 90_000, NOW);
        assert_eq!(cooldown.remaining_secs(), 0);
        assert!(cooldown.can_resend());
    }

    #[test]
    fn test_resume_rounds_partial_seconds_down() {
        assert_eq!(remaining_after(NOW - 45_999, NOW), 15);
        assert_eq!(remaining_after(NOW - 59_999, NOW), 1);
        assert_eq!(remaining_after(NOW - 60_000, NOW), 0);
    }

    #[test]
    fn test_future_timestamp_counts_as_fresh() {
        assert_eq!(remaining_after(NOW + 5_000, NOW), RESEND_COOLDOWN_SECS);
    }

    #[test]
    fn test_tick_counts_down_to_zero() {
        let mut cooldown = ResendCooldown::resume(NOW - 57_000, NOW);
        assert_eq!(cooldown.tick(NOW + 1_000), Tick::Running(2));
        assert_eq!(cooldown.tick(NOW + 2_000), Tick::Running(1));
        assert_eq!(cooldown.tick(NOW + 3_000), Tick::Elapsed);
        assert!(cooldown.can_resend());
        assert_eq!(cooldown.tick(NOW + 4_000), Tick::Idle);
    }

    #[test]
    fn test_late_tick_catches_up_with_wall_clock() {
        let mut cooldown = ResendCooldown::started_at(NOW);
        assert_eq!(cooldown.tick(NOW + 1_000), Tick::Running(59));
        // Background tab: the next tick arrives two minutes later
        assert_eq!(cooldown.tick(NOW + 121_000), Tick::Elapsed);
        assert!(cooldown.can_resend());
    }

    #[test]
    fn test_can_resend_tracks_remaining() {
        let mut cooldown = ResendCooldown::started_at(NOW);
        for second in 0..i64::from(RESEND_COOLDOWN_SECS) + 2 {
            assert_eq!(cooldown.can_resend(), cooldown.remaining_secs() == 0);
            cooldown.tick(NOW + second * 1_000);
        }
        assert!(cooldown.can_resend());
    }

    #[test]
    fn test_wait_required_uses_wall_clock() {
        let cooldown = ResendCooldown::started_at(NOW);
        assert_eq!(cooldown.wait_required(NOW + 10_000), Some(50));
        assert_eq!(cooldown.wait_required(NOW + 60_000), None);
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert_eq!(remaining_after(i64::MIN, NOW), 0);
        assert_eq!(remaining_after(i64::MAX, NOW), RESEND_COOLDOWN_SECS);
        assert_eq!(remaining_after(i64::MIN, i64::MAX), 0);
        assert!(ResendCooldown::resume(i64::MIN, NOW).can_resend());
    }

    #[test]
    fn test_restart() {
        let mut cooldown = ResendCooldown::resume(NOW - 120_000, NOW);
        cooldown.restart(NOW);
        assert_eq!(cooldown.remaining_secs(), RESEND_COOLDOWN_SECS);
        assert_eq!(cooldown.last_sent_at_ms(), NOW);
    }
}
