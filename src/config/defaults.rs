// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate.

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Lifetime of a notification when the caller does not pick one (in ms).
pub const DEFAULT_DURATION_MS: u64 = 5000;

/// Lifetime of the "copied to clipboard" confirmation (in ms).
pub const COPY_FEEDBACK_DURATION_MS: u64 = 2000;

/// Id of the element that holds the alerts.
pub const DEFAULT_CONTAINER_ID: &str = "alert-container";

/// Accessible label of the close button when no translation is available.
pub const DEFAULT_CLOSE_LABEL: &str = "Close";

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither the CLI, the config nor the OS picks one.
pub const DEFAULT_LOCALE: &str = "en-US";
