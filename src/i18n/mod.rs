// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Alert texts are resolved through the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - `.ftl` translation files embedded at build time
//! - Runtime language switching
//! - Fallback to `en-US` when a translation is missing

pub mod fluent;
