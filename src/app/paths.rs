// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first source that yields a directory wins:
//!
//! | Source | Set by |
//! |---|---|
//! | explicit argument | [`config_dir_with_override`], used by tests |
//! | `--config-dir` | [`init_cli_override`], called once from `main` |
//! | `ICED_GLANCE_CONFIG_DIR` | environment, ignored when empty |
//! | `<platform config dir>/IcedGlance` | `dirs::config_dir` |

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "IcedGlance";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GLANCE_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Stores the `--config-dir` value. Only the first call has an effect.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
}

fn from_cli() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

fn from_env() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_default() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME))
}

/// Config directory from the CLI, the environment or the platform.
///
/// `None` only when the platform has no notion of a config directory.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Like [`config_dir`], with `explicit` taking precedence over every source.
#[must_use]
pub fn config_dir_with_override(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(from_cli)
        .or_else(from_env)
        .or_else(platform_default)
}
