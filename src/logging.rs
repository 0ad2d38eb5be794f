// SPDX-License-Identifier: MPL-2.0
//! Log output for the binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,jobmatch_alerts=debug";

/// Installs a stderr subscriber honoring `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .is_ok()
}
