//! Request composition and the adaptation operation.
//!
//! [`AdaptationRequest`] turns validated inputs into the two-message exchange
//! sent to the model. [`TextAdapter`] drives the full flow: validate the
//! level label, compose the exchange, make one completion call, and trim the
//! first choice.

use std::str::FromStr;

use tracing::debug;

use crate::completion::{ChatCompletion, ChatMessage};
use crate::errors::{AdaptationError, ChatCompletionError};
use crate::identifiers::ModelName;
use crate::levels::CompressionLevel;

/// The persona sent as the system message of every exchange.
const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Interests beyond this count are ignored when composing the prompt.
const MAX_INTERESTS: usize = 5;

// ---------------------------------------------------------------------------
// Request composition
// ---------------------------------------------------------------------------

/// A validated adaptation request.
///
/// Construction keeps only the first `MAX_INTERESTS` interests, in their
/// original order; `text` is carried through untouched, empty or not.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptationRequest {
    text: String,
    interests: Vec<String>,
    level: CompressionLevel,
}

impl AdaptationRequest {
    /// Creates a request from raw inputs.
    pub fn new(text: impl Into<String>, interests: &[String], level: CompressionLevel) -> Self {
        Self {
            text: text.into(),
            interests: interests.iter().take(MAX_INTERESTS).cloned().collect(),
            level,
        }
    }

    /// Returns the interests that will appear in the prompt.
    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Returns the requested compression level.
    pub fn level(&self) -> CompressionLevel {
        self.level
    }

    /// Composes the two-message exchange for this request.
    ///
    /// The user message quotes the level label and its sentence range
    /// verbatim. An empty interest list yields an empty interest segment;
    /// the instruction still forms.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        let interests = self.interests.join(", ");
        let instruction = format!(
            "Rephrase the following text using concepts from these interests: {interests}. \
             Make it {level} ({range}) and accessible for a neurodiverse audience: {text}",
            level = self.level,
            range = self.level.profile().sentence_range,
            text = self.text,
        );
        vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(instruction)]
    }
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

/// Drives one text adaptation against a chat-completion backend.
///
/// Holds the completion port and the model requests are addressed to. The
/// adapter keeps no mutable state, so one instance serves any number of
/// calls, concurrent or not.
pub struct TextAdapter<C> {
    completion: C,
    model: ModelName,
}

impl<C: ChatCompletion> TextAdapter<C> {
    /// Creates an adapter that sends requests to `model` via `completion`.
    pub fn new(completion: C, model: ModelName) -> Self {
        Self { completion, model }
    }

    /// Rewrites `text` guided by `interests` at the verbosity named by `level_label`.
    ///
    /// `level_label` must be one of the recognised compression labels;
    /// validation happens before any network activity. Only the first five
    /// interests are used, in their original order. Returns the first
    /// completion choice's content with surrounding whitespace removed; any
    /// remote failure propagates unchanged.
    pub async fn adapt(
        &self,
        text: &str,
        interests: &[String],
        level_label: &str,
    ) -> Result<String, AdaptationError> {
        let level = CompressionLevel::from_str(level_label)?;
        let request = AdaptationRequest::new(text, interests, level);

        debug!(
            %level,
            ratio = level.profile().ratio,
            interest_count = request.interests().len(),
            "composed adaptation request"
        );

        let messages = request.to_messages();
        let choices = self.completion.send_chat_completion(&self.model, &messages).await?;

        let first = choices.first().ok_or(ChatCompletionError::EmptyChoices)?;
        Ok(first.message.content.trim().to_string())
    }
}
