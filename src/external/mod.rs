//! Boundaries to external collaborators: the neural image classifier and the
//! chat-completion service. Both are injected behind traits so the scoring
//! core is testable without model weights or a network.
//!
//! This is the only layer allowed to surface a hard failure; internal scoring
//! degrades to documented fallbacks instead.

pub mod classifier;
pub mod completion;

use thiserror::Error;

/// Failure at an external-service boundary. Propagated to the caller as a
/// distinguishable failure, never masked as a neutral prediction.
#[derive(Debug, Error)]
pub enum ExternalServiceError {
    #[error("Cannot reach {service} at {url}")]
    Connection { service: String, url: String },

    #[error("{service} request timed out after {seconds}s")]
    Timeout { service: String, seconds: u64 },

    #[error("{service} returned status {status}: {body}")]
    Status {
        service: String,
        status: u16,
        body: String,
    },

    #[error("Failed to parse {service} response: {detail}")]
    ResponseParsing { service: String, detail: String },

    #[error("Unusable model output: {0}")]
    ModelOutput(String),
}

pub use classifier::{classify, Classification, ImageClassifier, ImageTensor};
pub use completion::{CompletionService, HttpCompletionClient};
