//! Módulo de hashing, canonicalización JSON y acuñado de identificadores.

pub mod canonical_json;
pub mod mint;

pub use canonical_json::to_canonical_json;
pub use mint::{blank_anchor, hash_str, mint, mint_parts, MINTED_HEX_LEN};
