//! Transient, auto-dismissing user notifications.

use std::time::Duration;

use tokio::time::Instant;

/// How long a notice stays visible before it is dismissed.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// A single non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Queue of notices that expire after a fixed time to live.
#[derive(Debug)]
pub struct Notices {
    entries: Vec<(Notice, Instant)>,
    ttl: Duration,
}

impl Default for Notices {
    fn default() -> Self {
        Self::new(NOTICE_TTL)
    }
}

impl Notices {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn push(&mut self, notice: Notice) {
        self.prune();
        self.entries.push((notice, Instant::now() + self.ttl));
    }

    /// Notices that have not yet been dismissed, oldest first.
    pub fn active(&self) -> Vec<&Notice> {
        let now = Instant::now();
        self.entries
            .iter()
            .filter(|(_, expires_at)| *expires_at > now)
            .map(|(notice, _)| notice)
            .collect()
    }

    /// Removes and returns the notices still visible.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.prune();
        self.entries.drain(..).map(|(notice, _)| notice).collect()
    }

    fn prune(&mut self) {
        let now = Instant::now();
        self.entries.retain(|(_, expires_at)| *expires_at > now);
    }
}
