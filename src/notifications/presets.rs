// SPDX-License-Identifier: MPL-2.0
//! Canned alerts raised by the rest of the front-end.
//!
//! API calls report connection failures, HTTP error statuses and upload
//! failures through these, and the copy-to-clipboard helper confirms (or
//! reports) the copy.

use super::notification::Severity;
use crate::config::defaults::COPY_FEEDBACK_DURATION_MS;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// A request to the server failed.
    ConnectionError,
    /// The server answered with an error status.
    RequestFailed(u16),
    /// A file upload failed.
    UploadError,
    /// Text was copied to the clipboard.
    CopySuccess,
    /// Copying to the clipboard failed.
    CopyError,
}

impl Preset {
    /// Presets that take no arguments.
    pub const ALL: [Preset; 4] = [
        Preset::ConnectionError,
        Preset::UploadError,
        Preset::CopySuccess,
        Preset::CopyError,
    ];

    /// Returns the Fluent message key.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Preset::ConnectionError => "notification-connection-error",
            Preset::RequestFailed(_) => "notification-request-failed",
            Preset::UploadError => "notification-upload-error",
            Preset::CopySuccess => "notification-copy-success",
            Preset::CopyError => "notification-copy-error",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Preset::CopySuccess => Severity::Success,
            Preset::ConnectionError
            | Preset::RequestFailed(_)
            | Preset::UploadError
            | Preset::CopyError => Severity::Error,
        }
    }

    /// Returns the Fluent arguments the message needs.
    #[must_use]
    pub fn message_args(self) -> Vec<(&'static str, String)> {
        match self {
            Preset::RequestFailed(status) => vec![("status", status.to_string())],
            _ => Vec::new(),
        }
    }

    /// Returns the preset's own lifetime, or `None` to use the configured default.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            Preset::CopySuccess => Some(Duration::from_millis(COPY_FEEDBACK_DURATION_MS)),
            _ => None,
        }
    }
}
