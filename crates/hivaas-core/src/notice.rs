//! Transient confirmation messages with a fixed lifetime.

use std::time::{Duration, Instant};

pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    posted_at: Instant,
    ttl: Duration,
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn posted_at(&self) -> Instant {
        self.posted_at
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.posted_at + self.ttl
    }

    #[must_use]
    pub fn is_live_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }
}

/// Holds at most one notice. Posting replaces the previous notice along with
/// its expiry.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    ttl: Duration,
    current: Option<Notice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_TTL)
    }
}

impl NoticeBoard {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn post(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notice {
            message: message.into(),
            posted_at: now,
            ttl: self.ttl,
        });
    }

    /// The most recent notice regardless of expiry.
    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_at(&self, now: Instant) -> Option<&Notice> {
        self.current.as_ref().filter(|n| n.is_live_at(now))
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_expires_after_ttl() {
        let mut board = NoticeBoard::new(Duration::from_secs(2));
        let t0 = Instant::now();
        board.post("Added to wishlist!", t0);

        let notice = board.current_at(t0).expect("notice should be live");
        assert_eq!(notice.message(), "Added to wishlist!");
        assert!(board.current_at(t0 + Duration::from_millis(1999)).is_some());
        assert!(board.current_at(t0 + Duration::from_secs(2)).is_none());
        assert!(board.latest().is_some());
    }

    #[test]
    fn newer_notice_carries_its_own_expiry() {
        let mut board = NoticeBoard::new(Duration::from_secs(2));
        let t0 = Instant::now();
        board.post("Added to wishlist!", t0);
        board.post("Removed from wishlist!", t0 + Duration::from_millis(1500));

        let later = t0 + Duration::from_millis(2500);
        let notice = board.current_at(later).expect("second notice should still be live");
        assert_eq!(notice.message(), "Removed from wishlist!");
    }

    #[test]
    fn empty_board_has_no_notice() {
        let board = NoticeBoard::default();
        assert!(board.current().is_none());
        assert!(board.latest().is_none());
    }
}
