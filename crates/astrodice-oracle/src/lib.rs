mod engine;
mod prompt;

pub use prompt::{base_reading_prompt, estimate_tokens, extended_reading_prompt, SYSTEM_PROMPT};

use astrodice_core::{AiSettings, Roll};

/// Output budget for the base reading (200-250 words).
const BASE_MAX_TOKENS: u32 = 400;
/// Output budget for the extended reading (150-200 words).
const EXTENDED_MAX_TOKENS: u32 = 350;

/// Generate the base interpretation for a roll via the configured provider.
pub async fn base_reading(
    settings: &AiSettings,
    question: &str,
    roll: &Roll,
) -> Result<String, String> {
    let user_msg = prompt::base_reading_prompt(question, roll);

    eprintln!(
        "[astrodice-oracle] base reading via {} ({})",
        settings.provider, settings.model
    );

    let text = engine::complete(settings, prompt::SYSTEM_PROMPT, &user_msg, BASE_MAX_TOKENS).await?;
    eprintln!(
        "[astrodice-oracle] got {} chars (~{} tokens)",
        text.len(),
        prompt::estimate_tokens(&text)
    );
    Ok(text)
}

/// Generate the extended interpretation. Requires the base reading text,
/// which the prompt builds on.
pub async fn extended_reading(
    settings: &AiSettings,
    question: &str,
    roll: &Roll,
    base: &str,
) -> Result<String, String> {
    let user_msg = prompt::extended_reading_prompt(question, roll, base);

    eprintln!(
        "[astrodice-oracle] extended reading via {} ({})",
        settings.provider, settings.model
    );

    let text =
        engine::complete(settings, prompt::SYSTEM_PROMPT, &user_msg, EXTENDED_MAX_TOKENS).await?;
    eprintln!(
        "[astrodice-oracle] got {} chars (~{} tokens)",
        text.len(),
        prompt::estimate_tokens(&text)
    );
    Ok(text)
}
