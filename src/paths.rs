// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these that is set wins: a directory passed in by the caller,
//! the `--config-dir` flag, `JOBMATCH_ALERTS_CONFIG_DIR`, then
//! `<platform config dir>/JobMatchAlerts`.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "JobMatchAlerts";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "JOBMATCH_ALERTS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

/// Config directory for this process, or `None` on platforms without one.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], but `explicit` beats every other source.
pub fn get_app_config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    let cli = CLI_CONFIG_DIR.get().cloned().flatten();
    resolve(explicit, cli, std::env::var_os(ENV_CONFIG_DIR))
}

fn resolve(
    explicit: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<OsString>,
) -> Option<PathBuf> {
    // An empty variable counts as unset.
    let env = env.filter(|value| !value.is_empty()).map(PathBuf::from);
    explicit
        .or(cli)
        .or(env)
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}
