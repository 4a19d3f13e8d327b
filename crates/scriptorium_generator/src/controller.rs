//! Generation state controller.
//!
//! Sequences the user-visible status around the two generation calls:
//!
//! ```text
//! Idle/Completed/Failed --submit--> GeneratingOutline --delay--> GeneratingContent --ok--> Completed
//!                                          \                           /
//!                                           `------- any failure -----'---> Failed
//! ```
//!
//! The outline phase is a fixed-duration pacing signal. It races the content
//! call on a timer and does not reflect real progress from the service.
//!
//! State is published through a [`watch`] channel, which keeps only the
//! latest value. An observer that falls behind can miss an intermediate
//! phase, but it sees phases in order and always sees the terminal state.

use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use scriptorium_core::{GenerationRequest, GenerationResult, GenerationState, GenerationStatus};
use scriptorium_error::{GenerationError, GenerationErrorKind};

use crate::EbookClient;

/// Owns the generation status and the last result or error message.
///
/// The controller is the only writer of its state. Observers hold a
/// [`watch::Receiver`] from [`subscribe`](Self::subscribe). `submit` takes
/// `&mut self`, so submissions never overlap.
#[derive(Debug)]
pub struct GenerationController {
    client: EbookClient,
    outline_delay: Duration,
    state: watch::Sender<GenerationState>,
}

impl GenerationController {
    /// Create an idle controller.
    pub fn new(client: EbookClient, outline_delay: Duration) -> Self {
        let (state, _) = watch::channel(GenerationState::Idle);
        Self {
            client,
            outline_delay,
            state,
        }
    }

    /// Receive every state replacement from now on.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GenerationState {
        self.state.borrow().clone()
    }

    /// Current status.
    pub fn status(&self) -> GenerationStatus {
        self.state.borrow().status()
    }

    /// Result of the last submission, when it completed.
    pub fn result(&self) -> Option<GenerationResult> {
        self.state.borrow().result().cloned()
    }

    /// Error message of the last submission, when it failed.
    pub fn error_message(&self) -> Option<String> {
        self.state.borrow().error_message().map(str::to_string)
    }

    /// Run one submission to completion and return the final status.
    ///
    /// Allowed from any resting status; a previous result or error is
    /// discarded. Without a credential the controller moves straight to
    /// Failed with the configuration message and issues no call.
    #[instrument(skip(self, request), fields(topic = %request.topic(), tone = %request.tone()))]
    pub async fn submit(&mut self, request: GenerationRequest) -> GenerationStatus {
        if !self.client.check_api_key() {
            let err = GenerationError::new(GenerationErrorKind::MissingCredential);
            warn!(error = %err, "Submission rejected: no API credential");
            self.replace(GenerationState::Failed(err.user_message().to_string()));
            return GenerationStatus::Failed;
        }

        self.replace(GenerationState::GeneratingOutline);

        match self.run(&request).await {
            Ok(result) => {
                info!(cover_style = %result.cover_style(), "eBook generated");
                self.replace(GenerationState::Completed(result));
            }
            Err(err) => {
                error!(error = %err, "eBook generation failed");
                self.replace(GenerationState::Failed(err.user_message().to_string()));
            }
        }

        self.status()
    }

    /// Content call raced against the outline timer, then the cover call.
    async fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let topic = request.topic();

        let content_call = self.client.generate_content(topic, *request.tone());
        tokio::pin!(content_call);

        let content = tokio::select! {
            biased;
            content = &mut content_call => content,
            _ = tokio::time::sleep(self.outline_delay) => {
                self.advance_to_content();
                content_call.await
            }
        }?;

        // Content arrived before the timer: enter the content phase and let
        // observers run before the cover call can settle the flow.
        if self.advance_to_content() {
            tokio::task::yield_now().await;
        }

        let suggestions = self.client.suggest_cover_styles(topic).await;
        Ok(GenerationResult::assemble(topic.as_str(), content, suggestions))
    }

    /// GeneratingOutline -> GeneratingContent; no-op from any other state.
    ///
    /// Returns whether the state changed.
    fn advance_to_content(&self) -> bool {
        let advanced = self.state.send_if_modified(|state| {
            if matches!(state, GenerationState::GeneratingOutline) {
                *state = GenerationState::GeneratingContent;
                true
            } else {
                false
            }
        });
        if advanced {
            debug!("Outline phase finished");
        }
        advanced
    }

    fn replace(&self, next: GenerationState) {
        let previous = self.state.send_replace(next);
        debug!(
            from = %previous.status(),
            to = %self.state.borrow().status(),
            "Generation state changed"
        );
    }
}
