// SPDX-License-Identifier: MPL-2.0
//! The page-wide notifier.
//!
//! Notifiers are `!Send`, so "one per page" means one per thread here. It is
//! created on first use; call [`init_global`] beforehand to configure it.

use super::notifier::Notifier;
use crate::config::defaults::DEFAULT_CLOSE_LABEL;
use crate::config::Config;
use crate::surface::Document;
use std::cell::OnceCell;

thread_local! {
    static GLOBAL: OnceCell<Notifier<Document>> = const { OnceCell::new() };
}

/// Creates the thread's notifier from `config`.
///
/// Returns `false` (and leaves the existing one untouched) if it was already
/// created, either by an earlier call or by [`global`].
pub fn init_global(config: &Config, close_label: &str) -> bool {
    GLOBAL.with(|cell| cell.set(Notifier::document(config, close_label)).is_ok())
}

/// Returns the thread's notifier, creating it with default settings if needed.
pub fn global() -> Notifier<Document> {
    GLOBAL.with(|cell| {
        cell.get_or_init(|| Notifier::document(&Config::default(), DEFAULT_CLOSE_LABEL))
            .clone()
    })
}
