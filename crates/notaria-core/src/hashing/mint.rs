//! Acuñado determinista de identificadores para sub-nodos.
//!
//! `mint(parent, discriminator)` es una función pura: concatena el padre con
//! los primeros 16 caracteres hex (64 bits) de SHA-256 sobre el JSON canónico
//! de `[parent, discriminator]`.
//!
//! Las colisiones no se detectan: con 64 bits son improbables dentro de un
//! registro, pero no imposibles.

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use super::canonical_json::to_canonical_json;

/// Longitud del sufijo hex acuñado.
pub const MINTED_HEX_LEN: usize = 16;

/// Hashea un string con SHA-256 y devuelve hex completo.
pub fn hash_str(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn short_hash(value: &Value) -> String {
    let mut full = hash_str(&to_canonical_json(value));
    full.truncate(MINTED_HEX_LEN);
    full
}

/// Deriva el identificador de un sub-nodo a partir del identificador padre y
/// un discriminador.
pub fn mint(parent: &str, discriminator: &str) -> String {
    format!("{}/{}", parent, short_hash(&json!([parent, discriminator])))
}

/// Variante para discriminadores compuestos (p.ej. valor + atajo). Las partes
/// se serializan como arreglo JSON antes del hash, así `["a|b"]` y
/// `["a", "b"]` no colisionan.
pub fn mint_parts(parent: &str, parts: &[&str]) -> String {
    mint(parent, &to_canonical_json(&json!(parts)))
}

/// Ancla para registros sin identificador: `_:` + hash del contenido
/// canónico de entrada.
pub fn blank_anchor(record: &Value) -> String {
    format!("_:{}", short_hash(record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_is_deterministic() {
        let a = mint("contract:misc001", "creation");
        let b = mint("contract:misc001", "creation");
        assert_eq!(a, b);
        assert!(a.starts_with("contract:misc001/"));
        assert_eq!(a.len(), "contract:misc001/".len() + MINTED_HEX_LEN);
    }

    #[test]
    fn mint_depends_on_both_inputs() {
        assert_ne!(mint("contract:1", "creation"), mint("contract:1", "acquisition"));
        assert_ne!(mint("contract:1", "creation"), mint("contract:2", "creation"));
    }

    #[test]
    fn mint_parts_keeps_parts_apart() {
        assert_ne!(mint_parts("r", &["a|b"]), mint_parts("r", &["a", "b"]));
        assert_ne!(mint_parts("r", &["Giovanni", "name"]),
                   mint_parts("r", &["Giovanni", "alternativeName"]));
    }

    #[test]
    fn blank_anchor_ignores_key_order() {
        let a = blank_anchor(&serde_json::json!({"a": 1, "b": 2}));
        let b = blank_anchor(&serde_json::json!({"b": 2, "a": 1}));
        assert_eq!(a, b);
        assert!(a.starts_with("_:"));
    }
}
