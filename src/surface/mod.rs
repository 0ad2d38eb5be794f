// SPDX-License-Identifier: MPL-2.0
//! Render surfaces for notifications.
//!
//! The manager never touches a display directly: it appends and removes
//! notifications through [`RenderSurface`]. [`Document`] is the in-memory page
//! model used by the binary, the global notifier and the tests.

mod document;

pub use document::{AlertElement, Document};

use crate::notifications::{Notification, NotificationId};

/// Something notifications can be drawn onto.
pub trait RenderSurface {
    /// Attaches a rendered notification. The surface creates its container on
    /// first use.
    fn append(&mut self, notification: &Notification);

    /// Detaches the notification with the given id.
    ///
    /// Returns `false` if nothing with that id is attached.
    fn remove(&mut self, id: NotificationId) -> bool;
}

impl<S: RenderSurface + ?Sized> RenderSurface for Box<S> {
    fn append(&mut self, notification: &Notification) {
        (**self).append(notification);
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        (**self).remove(id)
    }
}
