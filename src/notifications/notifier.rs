// SPDX-License-Identifier: MPL-2.0
//! Shared, single-threaded front end for the [`Manager`].
//!
//! `Notifier` is what the rest of an application holds on to: it can be cloned
//! freely, hands out [`NotificationHandle`]s with a close action, and owns the
//! async loop that fires expiry timers. Everything lives on one thread and
//! interleaves cooperatively with the caller, so there is no locking.

use super::manager::{Manager, Message};
use super::notification::{NotificationId, Severity};
use super::presets::Preset;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::surface::{Document, RenderSurface};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tokio::sync::Notify;
use tokio::time::Instant;

/// The part of the manager a handle needs.
trait Dismiss {
    fn dismiss(&mut self, id: NotificationId) -> bool;
    fn is_visible(&self, id: NotificationId) -> bool;
}

impl<S: RenderSurface> Dismiss for Manager<S> {
    fn dismiss(&mut self, id: NotificationId) -> bool {
        Manager::dismiss(self, id)
    }

    fn is_visible(&self, id: NotificationId) -> bool {
        Manager::is_visible(self, id)
    }
}

/// Reference to a shown notification, carrying its close action.
///
/// The handle does not keep the manager alive; once the notifier is gone every
/// operation is a no-op.
#[derive(Clone)]
pub struct NotificationHandle {
    id: NotificationId,
    target: Weak<RefCell<dyn Dismiss>>,
    wake: Weak<Notify>,
}

impl NotificationHandle {
    fn detached(id: NotificationId) -> Self {
        let target: Weak<RefCell<dyn Dismiss>> = Weak::<RefCell<Manager<Document>>>::new();
        Self {
            id,
            target,
            wake: Weak::new(),
        }
    }

    /// Returns the notification's id.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Removes the notification now and cancels its expiry timer.
    ///
    /// Returns `true` only for the call that actually removed it.
    pub fn dismiss(&self) -> bool {
        let Some(target) = self.target.upgrade() else {
            return false;
        };
        let Ok(mut manager) = target.try_borrow_mut() else {
            tracing::warn!(id = %self.id, "notifier busy, dismissal dropped");
            return false;
        };
        let removed = manager.dismiss(self.id);
        if removed {
            if let Some(wake) = self.wake.upgrade() {
                wake.notify_one();
            }
        }
        removed
    }

    /// Returns whether the notification is still on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        let Some(target) = self.target.upgrade() else {
            return false;
        };
        let visible = target
            .try_borrow()
            .map(|manager| manager.is_visible(self.id))
            .unwrap_or(false);
        visible
    }
}

impl fmt::Debug for NotificationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHandle")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Cloneable handle to a manager living on the current thread.
pub struct Notifier<S> {
    inner: Rc<RefCell<Manager<S>>>,
    wake: Rc<Notify>,
}

impl<S> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            wake: Rc::clone(&self.wake),
        }
    }
}

impl Notifier<Document> {
    /// Builds a notifier over an empty [`Document`] using the configured
    /// container id and default lifetime.
    pub fn document(config: &Config, close_label: &str) -> Self {
        let surface = Document::new(config.alerts.container_id(), close_label);
        Self::new(Manager::with_default_duration(
            surface,
            config.alerts.default_duration(),
        ))
    }
}

impl<S: RenderSurface + 'static> Notifier<S> {
    pub fn new(manager: Manager<S>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(manager)),
            wake: Rc::new(Notify::new()),
        }
    }

    /// Shows `message` for `duration` (zero keeps it until dismissed).
    pub fn notify(
        &self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        duration: Duration,
    ) -> NotificationHandle {
        let message = message.into();
        let severity = severity.into();
        match self.update(|manager| manager.notify(message, severity, duration)) {
            Some(id) => self.handle(id),
            None => NotificationHandle::detached(NotificationId::new()),
        }
    }

    /// Shows an info notification for the default lifetime.
    pub fn show(&self, message: impl Into<String>) -> NotificationHandle {
        self.show_with(message, Severity::Info)
    }

    /// Shows a notification for the default lifetime.
    pub fn show_with(
        &self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
    ) -> NotificationHandle {
        let duration = self.with_manager(Manager::default_duration);
        self.notify(message, severity, duration)
    }

    /// Shows one of the canned, localized alerts.
    pub fn notify_preset(&self, preset: Preset, i18n: &I18n) -> NotificationHandle {
        let duration = preset
            .duration()
            .unwrap_or_else(|| self.with_manager(Manager::default_duration));
        let args = preset.message_args();
        let message = if args.is_empty() {
            i18n.tr(preset.message_key())
        } else {
            let args: Vec<(&str, &str)> = args
                .iter()
                .map(|(name, value)| (*name, value.as_str()))
                .collect();
            i18n.tr_with_args(preset.message_key(), &args)
        };
        self.notify(message, preset.severity(), duration)
    }

    /// Dismisses a notification by id. Unknown ids are ignored.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.update(|manager| manager.dismiss(id)).unwrap_or(false)
    }

    /// Dismisses every visible notification.
    pub fn dismiss_all(&self) {
        self.update(Manager::dismiss_all);
    }

    /// Routes a close-button or tick message to the manager.
    pub fn handle_message(&self, message: &Message) {
        self.update(|manager| manager.handle_message(message));
    }

    /// Returns whether the notification is still visible.
    #[must_use]
    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.with_manager(|manager| manager.is_visible(id))
    }

    /// Runs `f` against the manager.
    pub fn with_manager<R>(&self, f: impl FnOnce(&Manager<S>) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Runs `f` against the render surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(self.inner.borrow().surface())
    }

    /// Fires expiry timers forever.
    ///
    /// Sleeps until the earliest deadline and wakes early whenever a timer is
    /// scheduled or cancelled. Must be polled on the thread that owns the
    /// notifier (e.g. inside `LocalSet` or alongside other work with `select!`).
    pub async fn run(&self) {
        loop {
            self.step(false).await;
        }
    }

    /// Fires expiry timers until none are pending.
    ///
    /// Persistent notifications do not keep this running.
    pub async fn run_until_idle(&self) {
        while self.step(true).await {}
    }

    /// Waits for the next deadline or wake-up. Returns `false` when idle and
    /// `stop_when_idle` is set.
    async fn step(&self, stop_when_idle: bool) -> bool {
        let next = self
            .inner
            .try_borrow()
            .ok()
            .and_then(|manager| manager.next_deadline());

        match next {
            Some(deadline) => {
                tokio::select! {
                    () = tokio::time::sleep_until(deadline) => {
                        self.update(|manager| manager.tick_at(Instant::now()));
                    }
                    () = self.wake.notified() => {}
                }
                true
            }
            None if stop_when_idle => false,
            None => {
                self.wake.notified().await;
                true
            }
        }
    }

    fn handle(&self, id: NotificationId) -> NotificationHandle {
        let target: Rc<RefCell<dyn Dismiss>> = self.inner.clone();
        NotificationHandle {
            id,
            target: Rc::downgrade(&target),
            wake: Rc::downgrade(&self.wake),
        }
    }

    /// Mutates the manager and wakes the timer loop. A re-entrant call is
    /// logged and skipped.
    fn update<R>(&self, f: impl FnOnce(&mut Manager<S>) -> R) -> Option<R> {
        let Ok(mut manager) = self.inner.try_borrow_mut() else {
            tracing::warn!("notifier busy, update dropped");
            return None;
        };
        let result = f(&mut manager);
        drop(manager);
        self.wake.notify_one();
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier<Document> {
        Notifier::document(&Config::default(), "Close")
    }

    #[tokio::test(start_paused = true)]
    async fn saved_alert_disappears_after_two_seconds() {
        let notifier = notifier();
        let start = Instant::now();
        let handle = notifier.notify("Saved", "success", Duration::from_millis(2000));

        assert!(handle.is_visible());
        assert_eq!(
            notifier.with_surface(|doc| doc.alerts_with(Severity::Success).count()),
            1
        );

        notifier.run_until_idle().await;

        assert!(!handle.is_visible());
        assert_eq!(notifier.with_surface(Document::alert_count), 0);
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(2000));
        assert!(elapsed < Duration::from_millis(2100));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismissal_beats_the_timer() {
        let notifier = notifier();
        let handle = notifier.notify("hi", Severity::Info, Duration::from_secs(5));
        let other = notifier.notify("other", Severity::Info, Duration::from_secs(5));

        let dismiss_early = async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            assert!(handle.dismiss());
            assert!(!handle.is_visible());
            assert!(other.is_visible());
        };
        tokio::join!(notifier.run_until_idle(), dismiss_early);

        assert!(!handle.dismiss());
        assert!(!other.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn persistent_alert_does_not_block_idle() {
        let notifier = notifier();
        let handle = notifier.notify("stay", Severity::Error, Duration::ZERO);

        notifier.run_until_idle().await;
        tokio::time::sleep(Duration::from_secs(60)).await;

        assert!(handle.is_visible());
        assert!(handle.dismiss());
        assert!(!handle.dismiss());
    }

    #[tokio::test(start_paused = true)]
    async fn run_picks_up_notifications_added_while_idle() {
        let notifier = notifier();
        let late = async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let handle = notifier.notify("late", Severity::Warning, Duration::from_millis(300));
            tokio::time::sleep(Duration::from_millis(301)).await;
            handle
        };

        let handle = tokio::select! {
            () = notifier.run() => unreachable!("run never returns"),
            handle = late => handle,
        };
        assert!(!handle.is_visible());
    }

    #[test]
    fn show_uses_configured_defaults() {
        let mut config = Config::default();
        config.alerts.default_duration_ms = Some(1234);
        let notifier = Notifier::document(&config, "Close");

        let handle = notifier.show("hello");
        let (severity, duration) = notifier.with_manager(|m| {
            let n = m.visible().next().expect("visible");
            (n.severity(), n.duration())
        });
        assert_eq!(severity, Severity::Info);
        assert_eq!(duration, Duration::from_millis(1234));
        assert!(notifier.dismiss(handle.id()));
    }

    #[test]
    fn handle_outliving_notifier_is_inert() {
        let handle = {
            let notifier = notifier();
            notifier.notify("bye", Severity::Info, Duration::ZERO)
        };
        assert!(!handle.is_visible());
        assert!(!handle.dismiss());
    }

    #[test]
    fn dismissal_while_manager_is_borrowed_is_dropped() {
        let notifier = notifier();
        let handle = notifier.notify("hi", Severity::Info, Duration::ZERO);

        let dismissed = notifier.with_manager(|_| handle.dismiss());
        assert!(!dismissed);
        assert!(handle.is_visible());

        let nested = notifier.with_manager(|_| {
            notifier.notify("nested", Severity::Info, Duration::ZERO)
        });
        assert!(!nested.is_visible());
        let id = nested.id();
        assert!(!notifier.is_visible(id));
        assert_eq!(notifier.with_surface(Document::alert_count), 1);

        assert!(handle.dismiss());
    }

    #[test]
    fn request_failure_preset_formats_the_status() {
        let notifier = notifier();
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());

        let handle = notifier.notify_preset(Preset::RequestFailed(503), &i18n);
        notifier.with_manager(|m| {
            let n = m.visible().next().expect("visible");
            assert_eq!(n.message(), "Request failed (HTTP 503)");
            assert_eq!(n.severity(), Severity::Error);
            assert_eq!(n.duration(), m.default_duration());
        });
        assert!(handle.is_visible());
    }

    #[test]
    fn close_action_message_dismisses() {
        let notifier = notifier();
        let handle = notifier.notify("hi", Severity::Info, Duration::ZERO);

        let close = notifier
            .with_surface(|doc| doc.close_action(handle.id()))
            .expect("close action");
        notifier.handle_message(&close);
        assert!(!handle.is_visible());
    }
}
