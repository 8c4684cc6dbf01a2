//! Logging setup for the host page or binary.
//!
//! Crate code logs through `leptos::logging`. This sets up the sinks for
//! records emitted by dependencies: browser (hydrate) gets the panic hook plus
//! `console_log`; native gets `tracing-subscriber` fmt output filtered by
//! `RUST_LOG`. Calling `init` more than once is a no-op.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
