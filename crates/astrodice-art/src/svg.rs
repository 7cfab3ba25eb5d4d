//! Deterministic SVG composition for a reading.
//!
//! Same inputs, same bytes: the only branch in the whole encoder is the
//! paid-interpretation flag, which swaps typography and adds a badge but
//! never touches geometry or color.

use astrodice_core::{catalog, roll::ordinal_suffix, Roll};
use base64::Engine;
use chrono::{DateTime, Utc};

use crate::colors::planet_palette;
use crate::glyphs::house_glyph;
use crate::patterns::sign_pattern;

pub const CANVAS_SIZE: u32 = 400;

/// Questions longer than this are cut to 47 chars plus "...".
const QUESTION_DISPLAY_MAX: usize = 50;

const STANDARD_FONT: &str = "'Arial', 'Helvetica', sans-serif";
const ORNATE_FONT: &str = "'Georgia', 'Times New Roman', serif";

#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub roll: Roll,
    pub question: String,
    pub username: String,
    pub timestamp: DateTime<Utc>,
    pub has_ai_reading: bool,
}

/// Escape the five XML special characters. Everything user-supplied goes
/// through here before being embedded in the document.
fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn truncate_question(question: &str) -> String {
    if question.chars().count() > QUESTION_DISPLAY_MAX {
        let mut cut: String = question.chars().take(QUESTION_DISPLAY_MAX - 3).collect();
        cut.push_str("...");
        cut
    } else {
        question.to_string()
    }
}

/// Compose the full 400x400 SVG document for a reading.
pub fn render(config: &VisualConfig) -> String {
    let palette = planet_palette(config.roll.planet);
    let pattern = sign_pattern(config.roll.sign);
    let glyph = house_glyph(config.roll.house);

    let planet = catalog::planet_info(config.roll.planet);
    let sign = catalog::sign_info(config.roll.sign);
    let short_house = catalog::short_house_name(config.roll.house);
    let house_number = config.roll.house.number() as u32;

    let date = config.timestamp.format("%b %-d, %Y").to_string();
    let question = escape_xml(&truncate_question(&config.question));
    let username = escape_xml(&config.username);

    // The only behavioral branch: typography treatment for paid readings.
    let (font_family, title_weight) = if config.has_ai_reading {
        (ORNATE_FONT, "normal")
    } else {
        (STANDARD_FONT, "bold")
    };

    let badge = if config.has_ai_reading {
        format!(
            "\n  <g transform=\"translate(355, 355)\">\n    <circle cx=\"0\" cy=\"0\" r=\"12\" fill=\"{}\" opacity=\"0.15\"/>\n    <text x=\"0\" y=\"4\" text-anchor=\"middle\" font-size=\"12\">&#x2728;</text>\n  </g>",
            palette.accent
        )
    } else {
        String::new()
    };

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 400" width="400" height="400">
  <defs>
    <linearGradient id="bgGradient" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{primary}" stop-opacity="0.9"/>
      <stop offset="100%" stop-color="{secondary}" stop-opacity="0.95"/>
    </linearGradient>

    <pattern id="stars" x="0" y="0" width="50" height="50" patternUnits="userSpaceOnUse">
      <circle cx="10" cy="10" r="0.5" fill="{accent}" opacity="0.6"/>
      <circle cx="35" cy="20" r="0.3" fill="{accent}" opacity="0.4"/>
      <circle cx="25" cy="40" r="0.4" fill="{accent}" opacity="0.5"/>
      <circle cx="45" cy="5" r="0.3" fill="{accent}" opacity="0.3"/>
      <circle cx="5" cy="30" r="0.4" fill="{accent}" opacity="0.5"/>
    </pattern>

    <pattern id="borderPattern" x="0" y="0" width="40" height="20" patternUnits="userSpaceOnUse">
      <path d="{border_path}" stroke="{accent}" stroke-width="{border_width}" fill="none" opacity="0.7"/>
    </pattern>

    <filter id="glow">
      <feGaussianBlur stdDeviation="2" result="coloredBlur"/>
      <feMerge>
        <feMergeNode in="coloredBlur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
  </defs>

  <rect width="400" height="400" fill="url(#bgGradient)"/>
  <rect width="400" height="400" fill="url(#stars)"/>

  <rect x="10" y="10" width="380" height="380" fill="none" stroke="url(#borderPattern)" stroke-width="20" rx="10"/>

  <rect x="30" y="30" width="340" height="340" fill="rgba(0,0,0,0.3)" rx="8"/>

  <text x="200" y="70" text-anchor="middle" font-family="{font_family}" font-size="20" font-weight="{title_weight}" fill="{accent}" filter="url(#glow)">
    {planet_symbol} {planet_name} in {sign_symbol} {sign_name}
  </text>

  <text x="200" y="95" text-anchor="middle" font-family="{font_family}" font-size="14" fill="{accent}" opacity="0.85">
    {house_number}{house_suffix} House - {short_house}
  </text>

  <g transform="translate(150, 120)">
    <path d="{glyph_path}" stroke="{accent}" stroke-width="{glyph_width}" fill="none" filter="url(#glow)"/>
  </g>

  <text x="200" y="270" text-anchor="middle" font-family="{font_family}" font-size="12" fill="{accent}" opacity="0.9" font-style="italic">
    "{question}"
  </text>

  <line x1="60" y1="300" x2="340" y2="300" stroke="{accent}" stroke-width="1" opacity="0.3"/>

  <text x="200" y="330" text-anchor="middle" font-family="{font_family}" font-size="11" fill="{accent}" opacity="0.7">
    {date} · @{username}
  </text>{badge}
</svg>"##,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent,
        border_path = pattern.path,
        border_width = pattern.stroke_width,
        font_family = font_family,
        title_weight = title_weight,
        planet_symbol = planet.symbol,
        planet_name = planet.name,
        sign_symbol = sign.symbol,
        sign_name = sign.name,
        house_number = house_number,
        house_suffix = ordinal_suffix(house_number),
        short_house = short_house,
        glyph_path = glyph.path,
        glyph_width = glyph.stroke_width,
        question = question,
        date = date,
        username = username,
        badge = badge,
    )
}

/// The SVG wrapped as a base64 data URI, for embedding.
pub fn render_data_uri(config: &VisualConfig) -> String {
    let svg = render(config);
    let encoded = base64::engine::general_purpose::STANDARD.encode(svg);
    format!("data:image/svg+xml;base64,{}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astrodice_core::{House, Planet, Sign};
    use chrono::TimeZone;

    fn config() -> VisualConfig {
        VisualConfig {
            roll: Roll {
                planet: Planet::Mars,
                sign: Sign::Pisces,
                house: House::new(7).unwrap(),
            },
            question: "Should I take the new job?".to_string(),
            username: "stargazer".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 5, 18, 30, 0).unwrap(),
            has_ai_reading: false,
        }
    }

    /// Geometry-bearing lines: paths, gradient stops, rects, circles, lines.
    fn geometry_lines(svg: &str) -> Vec<&str> {
        svg.lines()
            .map(str::trim)
            .filter(|l| {
                l.starts_with("<path")
                    || l.starts_with("<stop")
                    || l.starts_with("<rect")
                    || l.starts_with("<circle")
                    || l.starts_with("<line")
            })
            .collect()
    }

    #[test]
    fn rendering_is_deterministic() {
        let cfg = config();
        assert_eq!(render(&cfg), render(&cfg));
    }

    #[test]
    fn output_reflects_the_roll() {
        let svg = render(&config());
        assert!(svg.contains("♂ Mars in ♓ Pisces"));
        assert!(svg.contains("7th House - Relationships"));
        // Mars palette, Pisces border, 7th-house glyph
        assert!(svg.contains("#DC143C"));
        assert!(svg.contains("M0,20 Q20,0 40,20 M10,20 Q20,10 30,20"));
        assert!(svg.contains("M50,20 L50,75"));
        assert!(svg.contains("Jan 5, 2026 · @stargazer"));
    }

    #[test]
    fn free_text_is_xml_escaped() {
        let mut cfg = config();
        cfg.question = "a<b>&\"c'".to_string();
        cfg.username = "x&y".to_string();
        let svg = render(&cfg);
        assert!(svg.contains("a&lt;b&gt;&amp;&quot;c&apos;"));
        assert!(svg.contains("@x&amp;y"));
        assert!(!svg.contains("a<b>"));
    }

    #[test]
    fn long_questions_are_truncated_with_ellipsis() {
        let mut cfg = config();
        cfg.question = "x".repeat(51);
        let svg = render(&cfg);
        let expected = format!("{}...", "x".repeat(47));
        assert!(svg.contains(&expected));
        assert!(!svg.contains(&"x".repeat(48)));

        cfg.question = "y".repeat(50);
        let svg = render(&cfg);
        assert!(svg.contains(&"y".repeat(50)));
        assert!(!svg.contains("..."));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut cfg = config();
        cfg.question = "é".repeat(51);
        let svg = render(&cfg);
        assert!(svg.contains(&format!("{}...", "é".repeat(47))));
    }

    #[test]
    fn empty_inputs_are_accepted() {
        let mut cfg = config();
        cfg.question = String::new();
        cfg.username = String::new();
        let svg = render(&cfg);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn paid_flag_changes_typography_only() {
        let unpaid = render(&config());
        let paid = render(&VisualConfig {
            has_ai_reading: true,
            ..config()
        });

        assert!(unpaid.contains("'Arial'") && unpaid.contains("font-weight=\"bold\""));
        assert!(paid.contains("'Georgia'") && paid.contains("font-weight=\"normal\""));
        assert!(paid.contains("&#x2728;"));
        assert!(!unpaid.contains("&#x2728;"));

        // Geometry must be identical apart from the one badge circle.
        let unpaid_geom = geometry_lines(&unpaid);
        let paid_geom = geometry_lines(&paid);
        assert_eq!(paid_geom.len(), unpaid_geom.len() + 1);
        for line in &unpaid_geom {
            assert!(paid_geom.contains(line), "missing in paid output: {}", line);
        }
    }

    #[test]
    fn data_uri_wraps_the_same_document() {
        let cfg = config();
        let uri = render_data_uri(&cfg);
        let b64 = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), render(&cfg));
    }
}
