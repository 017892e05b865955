//! Logging setup for hosts and tests

use env_logger::{Builder, Env};

/// Install `env_logger` for the process.
///
/// Only this crate's records are shown by default, at `info`. Override with
/// `RUST_LOG`, e.g. `RUST_LOG=scatterpaint=trace` to see every projection tick.
///
/// # Example
/// ```
/// scatterpaint::core::logging::init();
/// log::info!("Painter ready");
/// ```
pub fn init() {
    builder().init();
}

/// Like [`init`], but safe to call repeatedly and captured by the test
/// harness. Returns false when a logger was already installed.
pub fn try_init() -> bool {
    builder().is_test(true).try_init().is_ok()
}

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("scatterpaint=info"))
}
