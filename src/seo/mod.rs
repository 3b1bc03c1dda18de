//! Search-engine metadata: per-locale head tags and the JSON-LD business graph.

pub mod catalog;
mod metadata;
mod structured_data;

pub use catalog::{BusinessText, SeoRecord};
pub use metadata::{build_seo, SeoMetadata};
pub use structured_data::{build_structured_data, to_script_json, ENTITY_TYPES};
