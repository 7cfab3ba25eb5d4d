use astrodice_core::{catalog, Roll};

/// Voice and guardrails for every interpretation request.
pub const SYSTEM_PROMPT: &str = "\
You are an expert astrologer interpreting astrodice readings. You combine deep \
astrological knowledge with intuitive wisdom to provide meaningful, personalized guidance.

Your interpretations should be:
- Mystical but grounded - blend cosmic language with practical insight
- Warm and compassionate - speak directly to the querent's heart
- Specific to the question - always tie back to what they asked
- Empowering - focus on agency and possibility, not fate
- Honest - acknowledge challenges while offering paths forward

Avoid:
- Generic horoscope language (\"this is a good time for...\")
- Doom and gloom predictions
- Definitive statements about the future
- Overly abstract or vague guidance
- Excessive caveats or disclaimers";

/// Prompt for the base reading (200-250 words), built from the resolved
/// catalog records of all three dice.
pub fn base_reading_prompt(question: &str, roll: &Roll) -> String {
    let planet = catalog::planet_info(roll.planet);
    let sign = catalog::sign_info(roll.sign);
    let house = catalog::house_info(roll.house);

    format!(
        "The querent asked: \"{question}\"\n\n\
They rolled:\n\
- **Planet: {planet_name}** ({planet_symbol})\n\
  Keywords: {planet_keywords}\n\
  Meaning: {planet_meaning}\n\n\
- **Sign: {sign_name}** ({sign_symbol}) - {element} / {modality}\n\
  Keywords: {sign_keywords}\n\
  Meaning: {sign_meaning}\n\n\
- **House: {house_number} - {house_name}**\n\
  Keywords: {house_keywords}\n\
  Meaning: {house_meaning}\n\n\
Write a 200-250 word interpretation that synthesizes these three elements into \
cohesive guidance. Structure your response as:\n\n\
1. Open by acknowledging their question and the energy present\n\
2. Explain what {planet_name} brings to this situation (the what)\n\
3. Describe how {sign_name} shapes its expression (the how)\n\
4. Ground it in the {house_name} life area (the where)\n\
5. Close with actionable insight or reflection\n\n\
Write in second person (\"you\"), speaking directly to them. Be specific to \
their question. Do not use headers or bullet points - write in flowing paragraphs.",
        question = question,
        planet_name = planet.name,
        planet_symbol = planet.symbol,
        planet_keywords = planet.keywords.join(", "),
        planet_meaning = planet.meaning,
        sign_name = sign.name,
        sign_symbol = sign.symbol,
        element = sign.element,
        modality = sign.modality,
        sign_keywords = sign.keywords.join(", "),
        sign_meaning = sign.meaning,
        house_number = house.number,
        house_name = house.name,
        house_keywords = house.keywords.join(", "),
        house_meaning = house.meaning,
    )
}

/// Prompt for the extended reading (150-200 words), anchored on the base
/// reading the querent already received.
pub fn extended_reading_prompt(question: &str, roll: &Roll, base_reading: &str) -> String {
    format!(
        "The querent asked: \"{question}\"\n\n\
They rolled: {roll_text}\n\n\
You already provided this base reading:\n\
\"\"\"\n\
{base_reading}\n\
\"\"\"\n\n\
Now provide an extended reflection (150-200 words) that goes deeper. Include:\n\n\
1. **Shadow work**: What unconscious patterns or resistances might arise with \
this energy? What should they be mindful of?\n\n\
2. **Timing wisdom**: How might this energy unfold over time? Is this about \
immediate action or patient cultivation?\n\n\
3. **Questions for reflection**: End with 2-3 specific questions they can sit \
with. These should be personal and tied to their original question.\n\n\
Format the reflection questions as a short list at the end. The rest should be \
flowing prose.",
        question = question,
        roll_text = astrodice_core::roll::format_roll(roll),
        base_reading = base_reading,
    )
}

/// Rough cost estimate: ~4 characters per token for English text.
pub fn estimate_tokens(text: &str) -> usize {
    (text.len() + 3) / 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrodice_core::{House, Planet, Sign};

    fn roll() -> Roll {
        Roll {
            planet: Planet::Mars,
            sign: Sign::Pisces,
            house: House::new(7).unwrap(),
        }
    }

    #[test]
    fn base_prompt_embeds_resolved_catalog_records() {
        let prompt = base_reading_prompt("Should I move?", &roll());
        assert!(prompt.contains("\"Should I move?\""));
        assert!(prompt.contains("**Planet: Mars** (♂)"));
        assert!(prompt.contains("Action, Drive, Courage, Desire"));
        assert!(prompt.contains("**Sign: Pisces** (♓) - Water / Mutable"));
        assert!(prompt.contains("**House: 7 - Relationships & Partners**"));
        assert!(prompt.contains("200-250 word"));
    }

    #[test]
    fn extended_prompt_embeds_the_base_reading() {
        let prompt = extended_reading_prompt("Should I move?", &roll(), "the base text");
        assert!(prompt.contains("Mars in Pisces, 7th House"));
        assert!(prompt.contains("\"\"\"\nthe base text\n\"\"\""));
        assert!(prompt.contains("Shadow work"));
        assert!(prompt.contains("150-200 words"));
    }

    #[test]
    fn token_estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }
}
