// SPDX-License-Identifier: MPL-2.0
//! `jobmatch_alerts` renders the transient alerts of the JobMatch front-end.
//!
//! A notification is shown on a render surface, lives for a fixed time (or
//! until dismissed) and is then removed for good. Timers run cooperatively on
//! the caller's thread; see [`notifications`] for the moving parts.

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod notifications;
pub mod paths;
pub mod surface;

use notifications::{NotificationHandle, Severity};
use std::time::Duration;

/// Shows a notification on the thread's global notifier.
///
/// Unknown severity names fall back to info; a zero duration keeps the
/// notification until it is dismissed.
pub fn notify(
    message: impl Into<String>,
    severity: impl Into<Severity>,
    duration: Duration,
) -> NotificationHandle {
    notifications::global().notify(message, severity, duration)
}
