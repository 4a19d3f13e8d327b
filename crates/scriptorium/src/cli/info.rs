//! `tones` and `check` command handlers.

use scriptorium::{
    CONFIGURATION_MESSAGE, GeminiClient, GeminiSettings, ScriptoriumResult, TextGenerator, Tone,
};
use std::process::ExitCode;

/// Print every tone label with the English name it also parses from.
pub fn list_tones() -> ExitCode {
    for tone in Tone::all() {
        println!("{:<28} ({})", tone.label(), tone.name());
    }
    ExitCode::SUCCESS
}

/// Report whether an API key is present in the environment.
pub fn check_credential(settings: &GeminiSettings) -> ScriptoriumResult<ExitCode> {
    let client = GeminiClient::from_env(settings)?;
    if client.has_credential() {
        println!(
            "Chave de API configurada ({} / {}).",
            client.provider_name(),
            client.model_name()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{}", CONFIGURATION_MESSAGE);
        Ok(ExitCode::FAILURE)
    }
}
