//! Notification model
//!
//! Used for displaying temporary feedback after resolving or staging.

use std::time::{Duration, Instant};

/// Default lifetime of a notification
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Severity of a notification; the UI picks its color from this
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A conflict was resolved or a file staged
    Success,
    Info,
    /// The operation was refused or only partly done (e.g. files skipped)
    Warning,
}

impl NotificationKind {
    /// Badge text shown before the message
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success:",
            Self::Info => "Info:",
            Self::Warning => "Warning:",
        }
    }
}

/// Transient feedback shown in the title of the content pane
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    /// How long the notification stays visible
    pub ttl: Duration,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: DEFAULT_NOTIFICATION_TTL,
        }
    }

    /// Create a success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Override the visible lifetime
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether `ttl` has elapsed since creation
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }
}
