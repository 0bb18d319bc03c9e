//! Core text adaptation domain for NeuroAdapt.
//!
//! This crate contains every domain concept, newtype identifier, and
//! cross-cutting error type used by the adaptation flow. Infrastructure
//! crates implement the traits defined here; they never add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`levels`] | Compression levels and their profiles (`CompressionLevel`, `LevelProfile`) |
//! | [`identifiers`] | Newtype identifiers and secrets (`ModelName`, `ApiKey`, etc.) |
//! | [`completion`] | Chat exchange shapes and the completion port trait |
//! | [`adapt`] | Request composition and the adaptation operation |
//! | [`errors`] | Validation and remote-call error types |

pub mod adapt;
pub mod completion;
pub mod errors;
pub mod identifiers;
pub mod levels;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use adapt::{AdaptationRequest, TextAdapter};
pub use completion::{ChatCompletion, ChatMessage, ChatRole, CompletionChoice};
pub use errors::{AdaptationError, ChatCompletionError};
pub use identifiers::{AdaptationRunId, ApiKey, ApiVersion, ModelName};
pub use levels::{CompressionLevel, LevelProfile, VALID_LABELS};
