// Tests for EbookClient against a scripted backend.

mod test_utils;

use scriptorium_core::{SamplingConfig, Tone};
use scriptorium_error::GenerationErrorKind;
use scriptorium_generator::{
    EbookClient, FAILURE_COVER_STYLES, MAX_COVER_STYLES, UNCONFIGURED_COVER_STYLES,
};
use std::sync::Arc;
use test_utils::{MockGenerator, MockResponse};

#[tokio::test]
async fn test_generate_content_returns_text_verbatim() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::new_sequence(vec![MockResponse::text(
        "# Marketing Digital\n...",
    )]));
    let client = EbookClient::new(mock.clone());

    let content = client
        .generate_content("Marketing Digital", Tone::Persuasive)
        .await?;

    assert_eq!(content, "# Marketing Digital\n...");
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_generate_content_uses_fixed_sampling_and_prompt() -> anyhow::Result<()> {
    let mock = Arc::new(MockGenerator::new_sequence(vec![MockResponse::text("# Yoga")]));
    let client = EbookClient::new(mock.clone());

    client.generate_content("Yoga", Tone::Casual).await?;

    let requests = mock.requests();
    assert_eq!(*requests[0].sampling(), Some(SamplingConfig::EBOOK));
    assert!(requests[0].prompt().contains("\"Yoga\""));
    assert!(requests[0].prompt().contains("Descontraído e Jovem"));
    assert!(requests[0].model().is_none());
    Ok(())
}

#[tokio::test]
async fn test_generate_content_without_credential_issues_no_call() {
    let mock = Arc::new(MockGenerator::new_unconfigured());
    let client = EbookClient::new(mock.clone());

    assert!(!client.check_api_key());
    let err = client
        .generate_content("Marketing Digital", Tone::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, GenerationErrorKind::MissingCredential);
    assert!(err.is_configuration());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_generate_content_empty_text_is_empty_result() {
    for response in [MockResponse::NoText, MockResponse::text("")] {
        let mock = Arc::new(MockGenerator::new_sequence(vec![response]));
        let client = EbookClient::new(mock);

        let err = client
            .generate_content("Tema", Tone::Academic)
            .await
            .unwrap_err();

        assert_eq!(err.kind, GenerationErrorKind::EmptyResult);
    }
}

#[tokio::test]
async fn test_generate_content_transport_error_is_not_retried() {
    let mock = Arc::new(MockGenerator::new_sequence(vec![
        MockResponse::transport_error(),
        MockResponse::text("would succeed on retry"),
    ]));
    let client = EbookClient::new(mock.clone());

    let err = client
        .generate_content("Tema", Tone::Academic)
        .await
        .unwrap_err();

    assert!(matches!(err.kind, GenerationErrorKind::Failed(ref cause) if cause.contains("connection reset")));
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_cover_styles_split_non_empty_lines() {
    let mock = Arc::new(MockGenerator::new_sequence(vec![MockResponse::text(
        "1. Capa azul\n\n2. Capa dourada\n   \n3. Capa minimalista\n",
    )]));
    let client = EbookClient::new(mock.clone());

    let styles = client.suggest_cover_styles("Finanças").await;

    assert_eq!(
        styles,
        vec!["1. Capa azul", "2. Capa dourada", "3. Capa minimalista"]
    );
    let requests = mock.requests();
    assert!(requests[0].sampling().is_none());
    assert!(requests[0].prompt().contains("\"Finanças\""));
}

#[tokio::test]
async fn test_cover_styles_capped() {
    let mock = Arc::new(MockGenerator::new_sequence(vec![MockResponse::text(
        "a\nb\nc\nd\ne",
    )]));
    let client = EbookClient::new(mock);

    let styles = client.suggest_cover_styles("Tema").await;

    assert_eq!(styles.len(), MAX_COVER_STYLES);
    assert_eq!(styles, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_cover_styles_without_credential_use_static_list() {
    let mock = Arc::new(MockGenerator::new_unconfigured());
    let client = EbookClient::new(mock.clone());

    let styles = client.suggest_cover_styles("Tema").await;

    assert_eq!(styles, UNCONFIGURED_COVER_STYLES.to_vec());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_cover_styles_failure_is_absorbed() {
    let mock = Arc::new(MockGenerator::new_sequence(vec![MockResponse::Error(
        scriptorium_error::GeminiErrorKind::HttpError {
            status_code: 500,
            message: "internal".into(),
        },
    )]));
    let client = EbookClient::new(mock);

    let styles = client.suggest_cover_styles("Tema").await;

    assert_eq!(styles, FAILURE_COVER_STYLES.to_vec());
}

#[tokio::test]
async fn test_cover_styles_without_text_is_empty() {
    let mock = Arc::new(MockGenerator::new_sequence(vec![MockResponse::NoText]));
    let client = EbookClient::new(mock);

    assert!(client.suggest_cover_styles("Tema").await.is_empty());
}
