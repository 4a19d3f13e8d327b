//! Google Gemini REST client.
//!
//! # Example
//!
//! ```no_run
//! use scriptorium_core::{GenerateRequest, GeminiSettings, SamplingConfig};
//! use scriptorium_interface::TextGenerator;
//! use scriptorium_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env(&GeminiSettings::default())?;
//!
//! let request = GenerateRequest::builder()
//!     .prompt("Escreva sobre jardinagem")
//!     .sampling(SamplingConfig::EBOOK)
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{:?}", response.text);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use tracing::{debug, error, instrument};

use scriptorium_core::{GenerateRequest, GenerateResponse, GeminiSettings};
use scriptorium_error::{GeminiError, GeminiErrorKind, HttpError, ScriptoriumResult};
use scriptorium_interface::TextGenerator;

use super::GeminiResult;
use super::protocol::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};

/// Environment variables consulted for the API key, in order.
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Read the API key from the environment.
///
/// `GEMINI_API_KEY` wins over `API_KEY`. Empty values count as absent.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

/// Client for the Gemini `generateContent` endpoint.
///
/// Holds its credential and default model from construction; nothing is
/// mutated afterwards. The HTTP client has no request timeout.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: Option<String>,
    model_name: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("has_credential", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with an explicit credential.
    ///
    /// A `None` or blank key produces a client whose
    /// [`has_credential`](TextGenerator::has_credential) is false.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be built.
    #[instrument(name = "gemini_client_new", skip(api_key))]
    pub fn new(api_key: Option<String>, settings: &GeminiSettings) -> ScriptoriumResult<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        let api_key = api_key.filter(|key| !key.trim().is_empty());
        debug!(has_credential = api_key.is_some(), "Creating Gemini client");

        Ok(Self {
            http,
            api_key,
            model_name: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client reading the key with [`api_key_from_env`].
    #[instrument(name = "gemini_client_from_env", skip(settings))]
    pub fn from_env(settings: &GeminiSettings) -> ScriptoriumResult<Self> {
        Self::new(api_key_from_env(), settings)
    }

    /// Endpoint URL for a model.
    ///
    /// Accepts model names with or without the `models/` prefix.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Internal generate method that returns Gemini-specific errors.
    #[instrument(skip(self, req), fields(model = tracing::field::Empty))]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        let model = req.model().as_deref().unwrap_or(self.model_name.as_str());
        tracing::Span::current().record("model", model);

        let body = GenerateContentRequest {
            contents: vec![Content::user_text(req.prompt().as_str())],
            generation_config: (*req.sampling()).map(GenerationConfig::from),
        };

        debug!(prompt_len = req.prompt().len(), "Sending request to Gemini API");

        let response = self
            .http
            .post(self.endpoint(model))
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            error!(status = %status, message = %message, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string()))
        })?;

        let text = parsed.text();
        debug!(
            text_len = text.as_ref().map(String::len),
            "Received response from Gemini"
        );

        Ok(GenerateResponse { text })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> ScriptoriumResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> GeminiSettings {
        GeminiSettings {
            model: "gemini-2.5-flash".to_string(),
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn test_endpoint_strips_prefix_and_trailing_slash() {
        let client =
            GeminiClient::new(Some("k".into()), &settings("https://example.test/v1beta/")).unwrap();

        assert_eq!(
            client.endpoint("models/gemini-2.5-pro"),
            "https://example.test/v1beta/models/gemini-2.5-pro:generateContent"
        );
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_blank_key_is_no_credential() {
        let client = GeminiClient::new(Some("  ".into()), &GeminiSettings::default()).unwrap();
        assert!(!client.has_credential());
        assert!(!format!("{:?}", client).contains("api_key"));
    }
}
