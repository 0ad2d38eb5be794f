// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` renders notifications onto a [`RenderSurface`], schedules their
//! expiry and handles dismissal. A notification is either visible or removed;
//! once removed it never comes back.

use super::notification::{Notification, NotificationId, Severity};
use super::scheduler::{Scheduler, TimerHandle};
use crate::config::defaults::DEFAULT_DURATION_MS;
use crate::surface::RenderSurface;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Expire every notification whose deadline has passed.
    Tick,
}

/// A visible notification together with the timer that will remove it.
#[derive(Debug)]
struct Active {
    notification: Notification,
    timer: Option<TimerHandle>,
}

/// Manages visible notifications and their expiry timers.
#[derive(Debug)]
pub struct Manager<S> {
    surface: S,
    /// Currently visible notifications (oldest first).
    visible: VecDeque<Active>,
    scheduler: Scheduler,
    default_duration: Duration,
}

impl<S: RenderSurface> Manager<S> {
    /// Creates a manager drawing onto `surface`, with the standard 5 second
    /// default lifetime.
    pub fn new(surface: S) -> Self {
        Self::with_default_duration(surface, Duration::from_millis(DEFAULT_DURATION_MS))
    }

    /// Creates a manager with a custom default lifetime.
    pub fn with_default_duration(surface: S, default_duration: Duration) -> Self {
        Self {
            surface,
            visible: VecDeque::new(),
            scheduler: Scheduler::new(),
            default_duration,
        }
    }

    /// Returns the lifetime used when the caller does not pick one.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Builds and shows a notification.
    ///
    /// An empty message renders nothing; the returned id then never refers to
    /// a visible notification.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: impl Into<Severity>,
        duration: Duration,
    ) -> NotificationId {
        let message = message.into();
        let severity = severity.into();
        if message.is_empty() {
            tracing::debug!(%severity, "ignoring notification with empty message");
            return NotificationId::new();
        }
        self.push(Notification::new(severity, message, duration))
    }

    /// Shows a prepared notification and schedules its expiry.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();

        match notification.severity() {
            Severity::Warning => {
                tracing::warn!(%id, message = notification.message(), "warning shown to user");
            }
            Severity::Error => {
                tracing::error!(%id, message = notification.message(), "error shown to user");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(%id, severity = %notification.severity(), "notification shown");
            }
        }

        self.surface.append(&notification);
        let timer = notification
            .deadline()
            .map(|deadline| self.scheduler.schedule(deadline, id));
        self.visible.push_back(Active {
            notification,
            timer,
        });
        id
    }

    /// Dismisses a notification by its ID, cancelling its timer.
    ///
    /// Returns `true` if the notification was visible. Dismissing an unknown
    /// or already removed notification does nothing.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(active) = self.take(id) else {
            return false;
        };
        if let Some(timer) = &active.timer {
            self.scheduler.cancel(timer);
        }
        tracing::debug!(%id, "notification dismissed");
        true
    }

    /// Dismisses every visible notification.
    pub fn dismiss_all(&mut self) {
        self.scheduler.clear();
        for active in self.visible.drain(..) {
            self.surface.remove(active.notification.id());
        }
    }

    /// Expires notifications whose deadline has passed.
    pub fn tick(&mut self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Expires notifications whose deadline is at or before `now`.
    ///
    /// Returns how many notifications were removed.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        let mut expired = 0;
        for id in self.scheduler.pop_due(now) {
            // The timer already fired, so there is nothing left to cancel.
            if self.take(id).is_some() {
                tracing::debug!(%id, "notification expired");
                expired += 1;
            }
        }
        expired
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|active| &active.notification)
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether the notification is still visible.
    #[must_use]
    pub fn is_visible(&self, id: NotificationId) -> bool {
        self.position(id).is_some()
    }

    /// Returns whether there are any visible notifications.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Returns the earliest pending expiry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Returns the number of pending expiry timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Returns the render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the render surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.visible
            .iter()
            .position(|active| active.notification.id() == id)
    }

    /// Removes a visible notification from both the list and the surface.
    fn take(&mut self, id: NotificationId) -> Option<Active> {
        let index = self.position(id)?;
        let active = self.visible.remove(index)?;
        self.surface.remove(id);
        Some(active)
    }
}
