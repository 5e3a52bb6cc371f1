//! Errores del motor de expansión.
//!
//! Sólo los problemas estructurales (registro mal ordenado, entrada que no es
//! un registro) son errores. Los elementos mal formados dentro de un atajo se
//! descartan en silencio y nunca llegan aquí.

use thiserror::Error;

use crate::transform::Phase;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ExpansionError {
    #[error("shortcut registered twice: {0}")]
    DuplicateShortcut(String),
    #[error("transformer '{reader}' reads {predicate} before '{writer}' writes it")]
    OrderViolation { reader: String,
                     writer: String,
                     predicate: String },
    #[error("transformer '{key}' in phase {phase:?} runs after phase {previous:?}")]
    PhaseRegression { key: String,
                      phase: Phase,
                      previous: Phase },
    #[error("record must be a JSON object, found {0}")]
    NotARecord(String),
    #[error("unsupported input shape: {0}")]
    UnsupportedShape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_violation_message_names_both_sides() {
        let err = ExpansionError::OrderViolation { reader: "sellersGuarantor".into(),
                                                   writer: "seller".into(),
                                                   predicate: "P23_transferred_title_from".into() };
        assert_eq!(err.to_string(),
                   "transformer 'sellersGuarantor' reads P23_transferred_title_from before 'seller' writes it");
    }

    #[test]
    fn not_a_record_format() {
        let err = ExpansionError::NotARecord("array".into());
        assert_eq!(err.to_string(), "record must be a JSON object, found array");
    }
}
