// SPDX-License-Identifier: MPL-2.0
//! In-memory page with a lazily created alert container.
//!
//! Mirrors the markup the JobMatch front-end uses for alerts so the output of
//! [`Document::to_html`] can be dropped into a page as-is.

use super::RenderSurface;
use crate::config::defaults::{DEFAULT_CLOSE_LABEL, DEFAULT_CONTAINER_ID};
use crate::notifications::{Notification, NotificationId, NotificationMessage, Severity};
use quick_xml::escape::escape;
use std::fmt::Write as _;

/// A rendered alert inside the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertElement {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: String,
}

impl AlertElement {
    fn from_notification(notification: &Notification) -> Self {
        Self {
            id: notification.id(),
            severity: notification.severity(),
            message: notification.message().to_string(),
            created_at: notification.created_at_local().to_rfc3339(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the element's class list.
    #[must_use]
    pub fn class_list(&self) -> String {
        format!("alert {} animate-fadeIn", self.severity.css_class())
    }

    fn write_html(&self, out: &mut String, close_label: &str) {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "<div class=\"{}\" data-id=\"{}\" data-created-at=\"{}\" role=\"alert\">\
             <div class=\"flex items-center gap-3\">\
             <span class=\"alert-icon\">{}</span>\
             <span class=\"alert-message\">{}</span>\
             </div>\
             <button class=\"alert-close\" aria-label=\"{}\">\u{00D7}</button>\
             </div>",
            self.class_list(),
            self.id,
            escape(self.created_at.as_str()),
            self.severity.icon(),
            escape(self.message.as_str()),
            escape(close_label),
        );
    }
}

#[derive(Debug, Default)]
struct AlertContainer {
    alerts: Vec<AlertElement>,
}

/// Page body holding at most one alert container.
#[derive(Debug)]
pub struct Document {
    container_id: String,
    close_label: String,
    container: Option<AlertContainer>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_CONTAINER_ID, DEFAULT_CLOSE_LABEL)
    }
}

impl Document {
    /// Creates an empty page. The container is not created until the first
    /// alert is appended.
    pub fn new(container_id: impl Into<String>, close_label: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            close_label: close_label.into(),
            container: None,
        }
    }

    /// Returns the id given to the alert container.
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Returns whether the alert container has been attached to the body.
    #[must_use]
    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    /// Returns the attached alerts, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[AlertElement] {
        match &self.container {
            Some(container) => &container.alerts,
            None => &[],
        }
    }

    /// Returns the number of attached alerts.
    #[must_use]
    pub fn alert_count(&self) -> usize {
        self.alerts().len()
    }

    /// Returns whether an alert with the given id is attached.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.alerts().iter().any(|alert| alert.id == id)
    }

    /// Returns the attached alerts with the given severity.
    pub fn alerts_with(&self, severity: Severity) -> impl Iterator<Item = &AlertElement> {
        self.alerts().iter().filter(move |alert| alert.severity == severity)
    }

    /// Returns the message the close button of an attached alert emits.
    #[must_use]
    pub fn close_action(&self, id: NotificationId) -> Option<NotificationMessage> {
        self.contains(id).then_some(NotificationMessage::Dismiss(id))
    }

    /// Serializes the page body.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<body>");
        if let Some(container) = &self.container {
            let _ = write!(
                out,
                "<div id=\"{}\" class=\"alert-container\">",
                escape(self.container_id.as_str())
            );
            for alert in &container.alerts {
                alert.write_html(&mut out, &self.close_label);
            }
            out.push_str("</div>");
        }
        out.push_str("</body>");
        out
    }

    fn container_mut(&mut self) -> &mut AlertContainer {
        if self.container.is_none() {
            tracing::debug!(container_id = %self.container_id, "creating alert container");
        }
        self.container.get_or_insert_with(AlertContainer::default)
    }
}

impl RenderSurface for Document {
    fn append(&mut self, notification: &Notification) {
        self.container_mut()
            .alerts
            .push(AlertElement::from_notification(notification));
    }

    fn remove(&mut self, id: NotificationId) -> bool {
        let Some(container) = self.container.as_mut() else {
            return false;
        };
        let before = container.alerts.len();
        container.alerts.retain(|alert| alert.id != id);
        container.alerts.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn alert(severity: Severity, message: &str) -> Notification {
        Notification::new(severity, message, Duration::from_secs(5))
    }

    #[test]
    fn container_is_created_on_first_append() {
        let mut document = Document::default();
        assert!(!document.has_container());
        assert_eq!(document.to_html(), "<body></body>");

        document.append(&alert(Severity::Info, "hello"));
        assert!(document.has_container());
        assert!(document.to_html().contains("id=\"alert-container\""));
    }

    #[test]
    fn container_is_never_duplicated() {
        let mut document = Document::default();
        let first = alert(Severity::Info, "one");
        let second = alert(Severity::Success, "two");

        document.append(&first);
        document.append(&second);
        document.remove(first.id());
        document.remove(second.id());

        assert!(document.has_container());
        assert_eq!(document.to_html().matches("id=\"alert-container\"").count(), 1);
    }

    #[test]
    fn rendered_alert_carries_icon_message_and_close_control() {
        let mut document = Document::new("toasts", "Fermer");
        let notification = alert(Severity::Success, "Saved");
        document.append(&notification);

        let html = document.to_html();
        assert!(html.contains("class=\"alert alert-success animate-fadeIn\""));
        assert!(html.contains("<span class=\"alert-icon\">✓</span>"));
        assert!(html.contains("<span class=\"alert-message\">Saved</span>"));
        assert!(html.contains("aria-label=\"Fermer\""));
        assert!(html.contains(&format!("data-id=\"{}\"", notification.id())));
    }

    #[test]
    fn message_markup_is_escaped() {
        let mut document = Document::default();
        document.append(&alert(Severity::Error, "<img src=x onerror=alert(1)>"));

        let html = document.to_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn remove_reports_whether_anything_was_detached() {
        let mut document = Document::default();
        let notification = alert(Severity::Warning, "careful");

        assert!(!document.remove(notification.id()));
        document.append(&notification);
        assert!(document.remove(notification.id()));
        assert!(!document.remove(notification.id()));
        assert_eq!(document.alert_count(), 0);
    }

    #[test]
    fn close_action_only_exists_for_attached_alerts() {
        let mut document = Document::default();
        let notification = alert(Severity::Info, "hi");
        assert!(document.close_action(notification.id()).is_none());

        document.append(&notification);
        assert!(matches!(
            document.close_action(notification.id()),
            Some(NotificationMessage::Dismiss(id)) if id == notification.id()
        ));
    }
}
