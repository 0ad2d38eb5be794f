// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use chrono::{DateTime, Local};
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value, as rendered in `data-id` attributes.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level determines the icon and visual styling of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Informational message.
    #[default]
    Info,
    /// Operation completed successfully.
    Success,
    /// Warning that doesn't block operation.
    Warning,
    /// Error requiring attention.
    Error,
}

impl Severity {
    /// All severities, in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Parses a severity name, falling back to [`Severity::Info`] for anything
    /// that is not one of the four known kinds.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    /// Returns the lowercase name used in class names and on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Returns the glyph shown in the alert's icon slot.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}",
            Severity::Error => "\u{2715}",
            Severity::Warning => "\u{26A0}",
            Severity::Info => "\u{2139}",
        }
    }

    /// Returns the severity-specific CSS class (`alert-success`, ...).
    #[must_use]
    pub fn css_class(self) -> String {
        format!("alert-{}", self.name())
    }
}

impl From<&str> for Severity {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines icon and styling).
    severity: Severity,
    /// Already-resolved message text.
    message: String,
    /// Monotonic creation time, drives expiry.
    created_at: Instant,
    /// Wall-clock creation time, for display.
    created_at_local: DateTime<Local>,
    /// Time to live; zero means the notification stays until dismissed.
    duration: Duration,
}

impl Notification {
    /// Creates a new notification, timestamped now.
    pub fn new(severity: Severity, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
            created_at_local: Local::now(),
            duration,
        }
    }

    /// Overrides the monotonic creation time.
    ///
    /// Useful for driving the manager with explicit instants.
    #[must_use]
    pub fn created(mut self, at: Instant) -> Self {
        self.created_at = at;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the wall-clock creation time.
    #[must_use]
    pub fn created_at_local(&self) -> DateTime<Local> {
        self.created_at_local
    }

    /// Returns the configured time to live.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether this notification stays until manually dismissed.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    /// Returns the instant at which this notification expires, if it ever does.
    ///
    /// A lifetime too long to represent as an instant never expires.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        if self.is_persistent() {
            None
        } else {
            self.created_at.checked_add(self.duration)
        }
    }

    /// Returns whether this notification has outlived its duration at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(Severity::Info, "test", Duration::ZERO);
        let n2 = Notification::new(Severity::Info, "test", Duration::ZERO);
        assert_ne!(n1.id(), n2.id());
        assert!(n2.id() > n1.id());
    }

    #[test]
    fn unknown_severity_names_fall_back_to_info() {
        assert_eq!(Severity::from_name("danger"), Severity::Info);
        assert_eq!(Severity::from_name(""), Severity::Info);
        assert_eq!(Severity::from("primary"), Severity::Info);
    }

    #[test]
    fn severity_names_are_case_insensitive() {
        assert_eq!(Severity::from_name("SUCCESS"), Severity::Success);
        assert_eq!(Severity::from_name(" warning "), Severity::Warning);
        assert_eq!(Severity::from(String::from("Error")), Severity::Error);
    }

    #[test]
    fn severity_name_parses_back() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_name(severity.name()), severity);
        }
    }

    #[test]
    fn severity_icons_are_distinct() {
        let icons: std::collections::HashSet<_> = Severity::ALL.iter().map(|s| s.icon()).collect();
        assert_eq!(icons.len(), Severity::ALL.len());
        assert_eq!(Severity::Success.icon(), "✓");
        assert_eq!(Severity::Error.icon(), "✕");
    }

    #[test]
    fn css_class_includes_severity_name() {
        assert_eq!(Severity::Warning.css_class(), "alert-warning");
    }

    #[test]
    fn zero_duration_is_persistent() {
        let notification = Notification::new(Severity::Error, "boom", Duration::ZERO);
        assert!(notification.is_persistent());
        assert!(notification.deadline().is_none());
        assert!(!notification.is_expired_at(Instant::now() + Duration::from_secs(3600)));
    }

    #[test]
    fn deadline_is_measured_from_creation() {
        let start = Instant::now();
        let notification =
            Notification::new(Severity::Success, "Saved", Duration::from_millis(2000)).created(start);

        assert_eq!(notification.deadline(), Some(start + Duration::from_millis(2000)));
        assert!(!notification.is_expired_at(start + Duration::from_millis(1999)));
        assert!(notification.is_expired_at(start + Duration::from_millis(2000)));
    }

    #[test]
    fn unrepresentable_deadline_never_expires() {
        let notification = Notification::new(Severity::Info, "long", Duration::MAX);
        assert!(!notification.is_persistent());
        assert!(notification.deadline().is_none());
        assert!(!notification.is_expired_at(Instant::now() + Duration::from_secs(3600)));
    }
}
