//! Test Module
//!
//! End-to-end scenario suite for the response engine.
//!
//! ## Test Categories
//! - `engine_tests`: full input-to-reply scenarios across the classifier,
//!   response bank, remote client, orchestrator and session actor

use std::sync::Once;

pub mod engine_tests;

static TRACING: Once = Once::new();

/// Installs a test subscriber once so failing scenarios print engine logs.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=mindful_core=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
