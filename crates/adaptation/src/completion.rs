//! Chat exchange shapes and the completion port.
//!
//! The types here describe one request/response exchange in provider-neutral
//! form. [`ChatCompletion`] is the seam between the domain and whichever
//! adapter talks to the hosted model; tests substitute a deterministic
//! implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ChatCompletionError;
use crate::identifiers::ModelName;

// ---------------------------------------------------------------------------
// Message shapes
// ---------------------------------------------------------------------------

/// The author of a chat message.
///
/// Serialises to the lowercase role tags used by chat-completion wire formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instruction framing that applies to the whole exchange.
    System,
    /// Content supplied on behalf of the caller.
    User,
    /// Content produced by the model.
    Assistant,
}

/// One message in a chat-completion exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored this message.
    pub role: ChatRole,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One completion choice returned by the model.
///
/// Providers may return several; [`crate::TextAdapter`] uses the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    /// The message produced for this choice.
    pub message: ChatMessage,
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Sends one chat-completion request and returns the raw choices.
///
/// Implementations own every transport concern: endpoint layout, headers,
/// serialisation. They must not retry; a failed call surfaces as a single
/// [`ChatCompletionError`].
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Performs one request/response round trip against `model`.
    async fn send_chat_completion(
        &self,
        model: &ModelName,
        messages: &[ChatMessage],
    ) -> Result<Vec<CompletionChoice>, ChatCompletionError>;
}
