// Logger setup. Call once, early in `main`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Start env_logger at `info` unless RUST_LOG says otherwise.
/// Later calls do nothing.
pub fn init_logging() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::debug!("logging initialized");
    });
}
