//! Mock text generator for testing.

#![allow(dead_code)]

use async_trait::async_trait;
use scriptorium_core::{GenerateRequest, GenerateResponse};
use scriptorium_error::{GeminiError, GeminiErrorKind, ScriptoriumError, ScriptoriumResult};
use scriptorium_interface::TextGenerator;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A single scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Answer with this text
    Text(String),
    /// Answer without any text part
    NoText,
    /// Fail with this error
    Error(GeminiErrorKind),
    /// Wait, then give the inner answer
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    pub fn text(text: impl Into<String>) -> Self {
        MockResponse::Text(text.into())
    }

    pub fn transport_error() -> Self {
        MockResponse::Error(GeminiErrorKind::ApiRequest("connection reset by peer".into()))
    }

    pub fn delayed(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Mock backend answering from a script, one entry per call.
///
/// Calls past the end of the script fail.
pub struct MockGenerator {
    script: Vec<MockResponse>,
    has_credential: bool,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockGenerator {
    /// Mock with a credential and the given script.
    pub fn new_sequence(script: Vec<MockResponse>) -> Self {
        Self {
            script,
            has_credential: true,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock answering the content call, then the cover call.
    pub fn new_success(content: impl Into<String>, covers: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::text(content), MockResponse::text(covers)])
    }

    /// Mock without a credential; any call fails.
    pub fn new_unconfigured() -> Self {
        Self {
            script: Vec::new(),
            has_credential: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate() calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    async fn answer(response: MockResponse) -> ScriptoriumResult<GenerateResponse> {
        let mut response = response;
        while let MockResponse::Delayed(delay, inner) = response {
            tokio::time::sleep(delay).await;
            response = *inner;
        }
        match response {
            MockResponse::Text(text) => Ok(GenerateResponse::from_text(text)),
            MockResponse::NoText => Ok(GenerateResponse::default()),
            MockResponse::Error(kind) => Err(ScriptoriumError::from(GeminiError::new(kind))),
            MockResponse::Delayed(..) => unreachable!("delays are unwrapped above"),
        }
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &GenerateRequest) -> ScriptoriumResult<GenerateResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        let next = self.script.get(index).cloned().unwrap_or_else(|| {
            MockResponse::Error(GeminiErrorKind::ApiRequest(format!(
                "Mock script exhausted (call {} beyond {} responses)",
                index + 1,
                self.script.len()
            )))
        });

        Self::answer(next).await
    }

    fn has_credential(&self) -> bool {
        self.has_credential
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
