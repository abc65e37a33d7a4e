use std::sync::Once;

static INIT: Once = Once::new();

/// Opt-in test logging: `RUST_LOG=propdoc_extract=trace cargo test ...`
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}
