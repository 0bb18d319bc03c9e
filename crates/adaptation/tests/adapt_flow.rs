//! Full adaptation flow driven against in-test completion backends.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use adaptation::{
    AdaptationError, ChatCompletion, ChatCompletionError, ChatMessage, ChatRole, CompletionChoice,
    ModelName, TextAdapter, VALID_LABELS,
};

fn model() -> ModelName {
    ModelName::new("gpt-4o").expect("model name is non-empty")
}

/// Records every exchange and answers with a fixed reply.
#[derive(Clone)]
struct RecordingCompletion {
    reply: String,
    exchanges: Arc<Mutex<Vec<(ModelName, Vec<ChatMessage>)>>>,
}

impl RecordingCompletion {
    fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            exchanges: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn exchange_count(&self) -> usize {
        self.exchanges.lock().unwrap().len()
    }

    fn recorded_user_message(&self) -> String {
        let exchanges = self.exchanges.lock().unwrap();
        let (_, messages) = exchanges.first().expect("an exchange was recorded");
        messages
            .iter()
            .find(|m| m.role == ChatRole::User)
            .expect("exchange has a user message")
            .content
            .clone()
    }

    fn recorded_model(&self) -> ModelName {
        let exchanges = self.exchanges.lock().unwrap();
        exchanges.first().expect("an exchange was recorded").0.clone()
    }
}

#[async_trait]
impl ChatCompletion for RecordingCompletion {
    async fn send_chat_completion(
        &self,
        model: &ModelName,
        messages: &[ChatMessage],
    ) -> Result<Vec<CompletionChoice>, ChatCompletionError> {
        self.exchanges.lock().unwrap().push((model.clone(), messages.to_vec()));
        Ok(vec![CompletionChoice {
            message: ChatMessage {
                role: ChatRole::Assistant,
                content: self.reply.clone(),
            },
        }])
    }
}

/// Always fails with an API-level rejection.
struct FailingCompletion;

#[async_trait]
impl ChatCompletion for FailingCompletion {
    async fn send_chat_completion(
        &self,
        _model: &ModelName,
        _messages: &[ChatMessage],
    ) -> Result<Vec<CompletionChoice>, ChatCompletionError> {
        Err(ChatCompletionError::Api {
            status: 500,
            message: "backend unavailable".to_string(),
        })
    }
}

/// Succeeds at the transport level but returns no choices.
struct EmptyCompletion;

#[async_trait]
impl ChatCompletion for EmptyCompletion {
    async fn send_chat_completion(
        &self,
        _model: &ModelName,
        _messages: &[ChatMessage],
    ) -> Result<Vec<CompletionChoice>, ChatCompletionError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn every_recognised_label_is_accepted_and_its_range_is_quoted() -> anyhow::Result<()> {
    let expected_ranges = [
        ("brief", "1-2 sentences"),
        ("short", "2-4 sentences"),
        ("medium", "4-10 sentences"),
        ("long", "10-15 sentences"),
    ];

    for (label, range) in expected_ranges {
        let backend = RecordingCompletion::replying("Adapted.");
        let adapter = TextAdapter::new(backend.clone(), model());

        let result = adapter.adapt("Some text to adapt.", &[], label).await?;
        assert_eq!(result, "Adapted.");

        let prompt = backend.recorded_user_message();
        assert!(prompt.contains(label), "prompt for {label}: {prompt}");
        assert!(prompt.contains(range), "prompt for {label}: {prompt}");
    }
    Ok(())
}

#[tokio::test]
async fn unknown_labels_are_rejected_before_any_call() {
    for label in ["Brief", "", "BRIEF", "brisk"] {
        let backend = RecordingCompletion::replying("never sent");
        let adapter = TextAdapter::new(backend.clone(), model());

        let err = adapter
            .adapt("Some text.", &[], label)
            .await
            .expect_err("label should be rejected");

        assert!(
            matches!(err, AdaptationError::InvalidCompressionLevel { .. }),
            "unexpected error for {label:?}: {err}"
        );
        let message = err.to_string();
        for valid in VALID_LABELS {
            assert!(message.contains(valid), "message {message:?} should list {valid:?}");
        }
        assert_eq!(backend.exchange_count(), 0, "no request should be sent for {label:?}");
    }
}

#[tokio::test]
async fn only_the_first_five_interests_reach_the_prompt() -> anyhow::Result<()> {
    let interests: Vec<String> = [
        "Football", "Chess", "Trains", "Painting", "Astronomy", "Geology", "Sailing",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let backend = RecordingCompletion::replying("Adapted.");
    let adapter = TextAdapter::new(backend.clone(), model());
    adapter.adapt("Some text.", &interests, "medium").await?;

    let prompt = backend.recorded_user_message();
    assert!(
        prompt.contains("Football, Chess, Trains, Painting, Astronomy"),
        "prompt: {prompt}"
    );
    assert!(!prompt.contains("Geology"), "prompt: {prompt}");
    assert!(!prompt.contains("Sailing"), "prompt: {prompt}");
    Ok(())
}

#[tokio::test]
async fn empty_interest_lists_are_not_an_error() -> anyhow::Result<()> {
    let backend = RecordingCompletion::replying("Adapted.");
    let adapter = TextAdapter::new(backend.clone(), model());
    adapter.adapt("Some text.", &[], "brief").await?;

    let prompt = backend.recorded_user_message();
    assert!(!prompt.contains("None"), "prompt: {prompt}");
    Ok(())
}

#[tokio::test]
async fn replies_are_returned_exactly_stripped() -> anyhow::Result<()> {
    let backend = RecordingCompletion::replying("  Hello there.  \n");
    let adapter = TextAdapter::new(backend, model());

    let result = adapter.adapt("Some text.", &[], "short").await?;
    assert_eq!(result, "Hello there.");
    Ok(())
}

#[tokio::test]
async fn backend_failures_propagate_as_remote_call_errors() {
    let adapter = TextAdapter::new(FailingCompletion, model());

    let err = adapter
        .adapt("Some text.", &[], "medium")
        .await
        .expect_err("backend failure should propagate");

    assert!(
        matches!(
            err,
            AdaptationError::RemoteCall(ChatCompletionError::Api { status: 500, .. })
        ),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn an_empty_choice_list_is_a_remote_call_error() {
    let adapter = TextAdapter::new(EmptyCompletion, model());

    let err = adapter
        .adapt("Some text.", &[], "medium")
        .await
        .expect_err("empty choice list should be an error");

    assert!(
        matches!(err, AdaptationError::RemoteCall(ChatCompletionError::EmptyChoices)),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn the_documented_example_composes_the_expected_exchange() -> anyhow::Result<()> {
    let backend = RecordingCompletion::replying("  Mitochondria score the goals of the cell.  ");
    let adapter = TextAdapter::new(backend.clone(), model());

    let result = adapter
        .adapt(
            "mitochondria is the powerhouse of the cell",
            &["Football".to_string()],
            "long",
        )
        .await?;

    assert_eq!(result, "Mitochondria score the goals of the cell.");
    assert_eq!(backend.recorded_model(), model());

    let prompt = backend.recorded_user_message();
    assert!(prompt.contains("Football"), "prompt: {prompt}");
    assert!(prompt.contains("long"), "prompt: {prompt}");
    assert!(prompt.contains("10-15 sentences"), "prompt: {prompt}");
    assert!(
        prompt.contains("mitochondria is the powerhouse of the cell"),
        "prompt: {prompt}"
    );
    Ok(())
}
