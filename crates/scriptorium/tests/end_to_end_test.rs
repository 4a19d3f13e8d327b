#![cfg(feature = "gemini")]

// Full flow against a local Gemini stand-in: REST client, generation client,
// controller and markdown export wired together as the binary wires them.

use scriptorium::{
    CONFIGURATION_MESSAGE, DOWNLOAD_NOTICE, EbookClient, EbookExport, GENERIC_FAILURE_MESSAGE,
    GeminiClient, GeminiSettings, GenerationController, GenerationRequest, GenerationStatus, Tone,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

const EBOOK: &str = "# Marketing Digital Sem Mistério\n\n## Capítulo 1\n\nConteúdo.\n";

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

fn controller_for(server: &MockServer, api_key: Option<&str>) -> GenerationController {
    let settings = GeminiSettings {
        model: "gemini-2.5-flash".to_string(),
        base_url: format!("{}/v1beta", server.uri()),
    };
    let backend =
        GeminiClient::new(api_key.map(String::from), &settings).expect("client builds");
    GenerationController::new(EbookClient::new(Arc::new(backend)), Duration::ZERO)
}

async fn mount_content(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_string_contains("Persuasivo (Vendas)"))
        .and(body_partial_json(json!({
            "generationConfig": {"topK": 40, "maxOutputTokens": 8192}
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_covers(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_string_contains("capa de eBook"))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_generates_and_exports_ebook() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_content(&server, text_response(EBOOK)).await;
    mount_covers(
        &server,
        text_response("Minimalista azul\n\nGráfico de crescimento\nMegafone\nQuarta ideia"),
        1,
    )
    .await;

    let mut controller = controller_for(&server, Some("test-key"));
    let request = GenerationRequest::new("Marketing Digital", Tone::Persuasive)?;

    let status = controller.submit(request).await;

    assert_eq!(status, GenerationStatus::Completed);
    let result = controller.result().expect("result after completion");
    assert_eq!(result.title(), "Marketing Digital");
    assert_eq!(result.content(), EBOOK);
    assert_eq!(result.cover_style(), "Minimalista azul");
    assert!(controller.error_message().is_none());

    let dir = tempfile::tempdir()?;
    let written = EbookExport::from(&result).write_to(dir.path())?;
    assert_eq!(
        written.file_name().and_then(|n| n.to_str()),
        Some("Marketing_Digital_MilvanEbook.md")
    );
    assert_eq!(std::fs::read_to_string(&written)?, EBOOK);
    assert!(DOWNLOAD_NOTICE.starts_with("Download iniciado!"));
    Ok(())
}

#[tokio::test]
async fn test_service_error_fails_with_generic_message() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_content(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({
            "error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}
        })),
    )
    .await;
    mount_covers(&server, text_response("Nunca pedida"), 0).await;

    let mut controller = controller_for(&server, Some("test-key"));
    let status = controller
        .submit(GenerationRequest::new("Marketing Digital", Tone::Persuasive)?)
        .await;

    assert_eq!(status, GenerationStatus::Failed);
    assert_eq!(controller.error_message().as_deref(), Some(GENERIC_FAILURE_MESSAGE));
    assert!(controller.result().is_none());
    Ok(())
}

#[tokio::test]
async fn test_cover_failure_still_completes() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_content(&server, text_response(EBOOK)).await;
    mount_covers(&server, ResponseTemplate::new(503), 1).await;

    let mut controller = controller_for(&server, Some("test-key"));
    let status = controller
        .submit(GenerationRequest::new("Marketing Digital", Tone::Persuasive)?)
        .await;

    assert_eq!(status, GenerationStatus::Completed);
    let result = controller.result().expect("result after completion");
    assert_eq!(result.cover_style(), "Design moderno");
    Ok(())
}

#[tokio::test]
async fn test_missing_key_fails_without_network() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_response(EBOOK))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server, None);
    let status = controller
        .submit(GenerationRequest::new("Marketing Digital", Tone::Persuasive)?)
        .await;

    assert_eq!(status, GenerationStatus::Failed);
    assert_eq!(controller.error_message().as_deref(), Some(CONFIGURATION_MESSAGE));
    Ok(())
}
