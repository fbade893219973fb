//! Logging initialization.
//!
//! Provides a single initialization point for tracing output.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize tracing output.
///
/// Call once at startup; later calls are no-ops. The `RUST_LOG` environment
/// variable overrides the per-profile default filter.
///
/// # Example
///
/// ```
/// use refleq_core::logging::{init, Profile};
///
/// init(Profile::Test);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("refleq=debug")),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("refleq=info")),
                    )
                    .init();
            }
            Profile::Test => {
                // Tests install their own capture subscriber when they need
                // one; the standard init path stays a no-op.
                tracing_subscriber::registry().init();
            }
        }
    });
}
