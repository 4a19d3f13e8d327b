//! `generate` command handler.

use scriptorium::{
    DOWNLOAD_NOTICE, EbookClient, EbookExport, GeminiClient, GenerationController,
    GenerationRequest, GenerationState, GenerationStatus, ScriptoriumConfig, ScriptoriumResult, Tone,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Inputs of a `generate` invocation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Subject of the eBook
    pub topic: String,
    /// Voice preset
    pub tone: Tone,
    /// Directory the markdown file is written to
    pub output_dir: PathBuf,
    /// Print the markdown to stdout as well
    pub print: bool,
}

/// Generate one eBook, report progress, and save the result.
///
/// Returns a failure exit code with the user message on stderr when the
/// topic is empty or generation fails.
#[instrument(skip_all, fields(topic = %options.topic, tone = %options.tone))]
pub async fn run_generate(
    options: GenerateOptions,
    config: &ScriptoriumConfig,
) -> ScriptoriumResult<ExitCode> {
    let request = match GenerationRequest::new(options.topic.as_str(), options.tone) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    let backend = GeminiClient::from_env(&config.gemini)?;
    let client = EbookClient::new(Arc::new(backend));
    let mut controller = GenerationController::new(client, config.generator.outline_delay());

    let progress = controller.subscribe();
    let (status, ()) = tokio::join!(controller.submit(request), report_progress(progress));
    debug!(status = %status, "Submission finished");

    match controller.state() {
        GenerationState::Completed(result) => {
            println!();
            println!("{}", result.title());
            println!("Estilo Visual Sugerido: {}", result.cover_style());

            if options.print {
                println!();
                println!("{}", result.content());
            }

            let export = EbookExport::from(&result);
            let path = export.write_to(&options.output_dir)?;
            info!(path = %path.display(), "eBook exported");

            println!();
            println!("{}", path.display());
            println!("{}", DOWNLOAD_NOTICE);
            Ok(ExitCode::SUCCESS)
        }
        GenerationState::Failed(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
        other => {
            eprintln!("Generation ended in unexpected state: {}", other.status());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print the progress message of each in-flight state until the
/// submission settles.
async fn report_progress(mut progress: watch::Receiver<GenerationState>) {
    loop {
        let status = progress.borrow_and_update().status();
        if let Some(message) = status.progress_message() {
            println!("{}", message);
        }
        if matches!(
            status,
            GenerationStatus::Completed | GenerationStatus::Failed
        ) {
            break;
        }
        if progress.changed().await.is_err() {
            break;
        }
    }
}
