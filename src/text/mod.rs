//! Text normalization and extraction over recognized page text

mod entities;
mod keyvalue;
mod normalize;

pub use entities::{extract_entities, EntitySet};
pub use keyvalue::extract_key_values;
pub use normalize::normalize_text;
