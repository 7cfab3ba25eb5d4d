use llm::builder::{LLMBackend, LLMBuilder};
use llm::chat::ChatMessage;

use astrodice_core::AiSettings;

/// Matches the original product's sampling setup.
const TEMPERATURE: f32 = 0.7;

fn map_backend(provider: &str) -> Result<LLMBackend, String> {
    match provider {
        "openai" => Ok(LLMBackend::OpenAI),
        "anthropic" => Ok(LLMBackend::Anthropic),
        "google" => Ok(LLMBackend::Google),
        "ollama" => Ok(LLMBackend::Ollama),
        "groq" => Ok(LLMBackend::Groq),
        "mistral" => Ok(LLMBackend::Mistral),
        "deepseek" => Ok(LLMBackend::DeepSeek),
        other => Err(format!("unknown provider: {other}")),
    }
}

/// One non-streaming completion against the configured provider.
pub async fn complete(
    settings: &AiSettings,
    system: &str,
    user_msg: &str,
    max_tokens: u32,
) -> Result<String, String> {
    let backend = map_backend(&settings.provider)?;

    let mut builder = LLMBuilder::new()
        .backend(backend)
        .model(&settings.model)
        .system(system)
        .max_tokens(max_tokens)
        .temperature(TEMPERATURE);

    if !settings.api_key.is_empty() {
        builder = builder.api_key(&settings.api_key);
    }

    let llm = builder.build().map_err(|e| format!("build LLM: {e}"))?;

    let messages = vec![ChatMessage::user().content(user_msg).build()];

    let response = llm.chat(&messages).await.map_err(|e| format!("chat: {e}"))?;

    match response.text() {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err("LLM returned empty text".to_string()),
        None => Err("LLM returned no text".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_providers_map_to_backends() {
        for provider in [
            "openai",
            "anthropic",
            "google",
            "ollama",
            "groq",
            "mistral",
            "deepseek",
        ] {
            assert!(map_backend(provider).is_ok(), "{}", provider);
        }
    }

    #[test]
    fn unknown_provider_is_named_in_the_error() {
        let err = map_backend("palantir").unwrap_err();
        assert!(err.contains("palantir"));
    }
}
