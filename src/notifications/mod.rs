// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to inform users about actions (save
//! success, errors, ...) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its id and `Severity`
//! - [`scheduler`] - cancellable expiry timers
//! - [`manager`] - the visible/removed lifecycle over a render surface
//! - [`notifier`] - shared handle, close actions and the timer loop
//! - [`presets`] - canned localized alerts
//! - [`global`] - the lazily created per-thread notifier
//!
//! # Usage
//!
//! ```no_run
//! use jobmatch_alerts::notifications::{global, Severity};
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let notifier = global();
//! let handle = notifier.notify("Saved", Severity::Success, Duration::from_millis(2000));
//!
//! // Somewhere on the same thread the timers are driven:
//! notifier.run_until_idle().await;
//! assert!(!handle.is_visible());
//! # }
//! ```

pub mod global;
pub mod manager;
pub mod notification;
pub mod notifier;
pub mod presets;
pub mod scheduler;

pub use global::{global, init_global};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use notifier::{NotificationHandle, Notifier};
pub use presets::Preset;
pub use scheduler::{Scheduler, TimerHandle};
