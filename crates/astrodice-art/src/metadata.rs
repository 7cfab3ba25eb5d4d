//! OpenSea-style NFT metadata for a minted reading.
//!
//! Construction only — the caller hands the JSON and the SVG to its upload
//! collaborator. The image URI is whatever that collaborator returned.

use astrodice_core::{roll::format_roll, Roll};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const EXTERNAL_URL_BASE: &str = "https://astrodice.xyz/reading";
const EXTENDED_SEPARATOR: &str = "\n\n--- Extended Reading ---\n\n";

#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    /// URI of the uploaded SVG.
    pub image: String,
    pub external_url: String,
    pub attributes: Vec<NftAttribute>,
    /// Full interpretation text, present only when a reading was purchased.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
pub struct NftAttribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(u64),
}

impl NftAttribute {
    fn text(trait_type: &str, value: impl Into<String>) -> Self {
        NftAttribute {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.into()),
        }
    }

    fn number(trait_type: &str, value: u64) -> Self {
        NftAttribute {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
        }
    }
}

/// Everything needed to describe a mint.
#[derive(Debug, Clone)]
pub struct MintParams {
    pub reading_id: u64,
    pub roll: Roll,
    pub question: String,
    pub username: String,
    pub user_fid: u64,
    pub timestamp: DateTime<Utc>,
    pub ai_reading: Option<String>,
    pub extended_reading: Option<String>,
}

/// Build the metadata record for a mint. `image_uri` is the address the
/// upload collaborator assigned to the rendered SVG.
pub fn build_metadata(params: &MintParams, image_uri: &str) -> NftMetadata {
    let has_ai = params.ai_reading.is_some();
    let has_extended = params.extended_reading.is_some();

    let attributes = vec![
        NftAttribute::text("Planet", params.roll.planet.name()),
        NftAttribute::text("Sign", params.roll.sign.name()),
        NftAttribute::number("House", params.roll.house.number() as u64),
        NftAttribute::text("Has AI Reading", if has_ai { "Yes" } else { "No" }),
        NftAttribute::text("Has Extended Reading", if has_extended { "Yes" } else { "No" }),
        NftAttribute::number("Farcaster FID", params.user_fid),
    ];

    let interpretation = params.ai_reading.as_ref().map(|base| {
        match &params.extended_reading {
            Some(extended) => format!("{}{}{}", base, EXTENDED_SEPARATOR, extended),
            None => base.clone(),
        }
    });

    NftMetadata {
        name: format!("Astrodice Reading #{}", params.reading_id),
        description: format!(
            "{}. Question: \"{}\"",
            format_roll(&params.roll),
            params.question
        ),
        image: image_uri.to_string(),
        external_url: format!("{}/{}", EXTERNAL_URL_BASE, params.reading_id),
        attributes,
        interpretation,
    }
}

/// Pretty-printed metadata JSON, ready for the upload collaborator.
pub fn metadata_json(metadata: &NftMetadata) -> Result<String, String> {
    serde_json::to_string_pretty(metadata).map_err(|e| e.to_string())
}
