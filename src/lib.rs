//! Symptica — symptom- and image-description-based health-information triage.
//!
//! Free-text symptoms or a skin-image description go in; ranked condition
//! candidates with calibrated scores, an ABCD mole-risk assessment where
//! relevant, and filtered educational recommendations come out. Disallowed
//! content (credentials, prescriptions, definitive diagnoses) is suppressed
//! before any text leaves the crate.
//!
//! All scoring is synchronous pure computation over immutable static tables;
//! the neural image classifier and the chat-completion service are injected
//! collaborators behind traits in [`external`].

pub mod analyzer;
pub mod config;
pub mod emergency;
pub mod external;
pub mod insights;
pub mod knowledge;
pub mod models;
pub mod predict;
pub mod safety;
pub mod skin;
pub mod vocabulary;

pub use analyzer::HealthAnalyzer;

use tracing_subscriber::EnvFilter;

/// Initialize tracing with the crate's default filter unless RUST_LOG is set.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
