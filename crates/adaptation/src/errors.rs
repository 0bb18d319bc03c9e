//! Validation and remote-call error types for the adaptation domain.
//!
//! [`AdaptationError`] is the caller-facing error of [`crate::TextAdapter`]
//! operations. Remote failures are produced by infrastructure adapters as
//! [`ChatCompletionError`] values and wrapped unchanged: the domain never
//! retries, falls back, or returns a partial result.

use thiserror::Error;

use crate::levels::VALID_LABELS;

// ---------------------------------------------------------------------------
// Adaptation errors
// ---------------------------------------------------------------------------

/// Errors surfaced to callers of adaptation operations.
#[derive(Debug, Error)]
pub enum AdaptationError {
    /// The caller-supplied compression label is not one of the recognised set.
    ///
    /// Raised during input validation, before any network activity.
    #[error("Compression level '{given}' must be one of: {}", VALID_LABELS.join(", "))]
    InvalidCompressionLevel {
        /// The label exactly as the caller supplied it.
        given: String,
    },

    /// The remote chat-completion call failed.
    ///
    /// Covers every remote failure mode uniformly; the wrapped value carries
    /// the diagnostic detail.
    #[error("Chat completion failed: {0}")]
    RemoteCall(#[from] ChatCompletionError),
}

// ---------------------------------------------------------------------------
// Chat completion errors
// ---------------------------------------------------------------------------

/// Failures produced by [`crate::ChatCompletion`] implementations.
///
/// The variants separate transport problems from API rejections and malformed
/// payloads for diagnostics only. Callers treat every variant the same way:
/// surface it, do not retry.
#[derive(Debug, Error)]
pub enum ChatCompletionError {
    /// The request never completed (connection, TLS, or timeout failure).
    #[error("Transport failure: {message}")]
    Transport {
        /// Description of the underlying transport problem.
        message: String,
    },

    /// The API answered with a non-success status code.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body returned with the failure.
        message: String,
    },

    /// The response body could not be parsed into completion choices.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of what failed to parse.
        message: String,
    },

    /// The response parsed correctly but contained no completion choices.
    #[error("Response contained no completion choices")]
    EmptyChoices,
}
