//! Logging initialization
//!
//! The kit only emits `tracing` events. Hosts that already install a
//! subscriber can ignore this module.

use crate::config::KernelConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered at the configured level
///
/// `RUST_LOG`, when set, takes precedence over `config.log_level`.
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_logging(config: &KernelConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.log_level == "trace")
        .try_init()
        .is_ok();

    if installed {
        debug!(
            log_level = %config.log_level,
            shuffle_policy = %config.shuffle_policy,
            memo_key = %config.memo_key,
            "utilkit logging initialised"
        );
    }
    installed
}
