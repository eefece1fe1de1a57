//! Transient informational and error messages

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a notice stays visible (2 seconds)
pub const NOTICE_TIMEOUT_MS: i64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown to the user until it times out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into(), shown_at: now }
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into(), shown_at: now }
    }

    /// Instant at which the notice should disappear
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::milliseconds(NOTICE_TIMEOUT_MS)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiry() {
        let shown = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let notice = Notice::error("Please enter the growth rate", shown);

        assert_eq!(notice.expires_at(), shown + Duration::seconds(2));
        assert!(!notice.is_expired(shown));
        assert!(!notice.is_expired(shown + Duration::milliseconds(1_999)));
        assert!(notice.is_expired(shown + Duration::seconds(2)));
    }
}
