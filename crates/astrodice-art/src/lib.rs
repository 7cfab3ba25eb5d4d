pub mod colors;
pub mod glyphs;
pub mod metadata;
pub mod patterns;
pub mod svg;

pub use metadata::{build_metadata, metadata_json, MintParams, NftAttribute, NftMetadata};
pub use svg::{render, render_data_uri, VisualConfig};
