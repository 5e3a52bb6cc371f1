//! Clasificación del tipo de documento de un registro.
//!
//! Los atajos polimórficos (p.ej. `receivingParty`) se expanden de forma
//! distinta según la clase de documento. La comparación es exacta sobre el
//! nombre local de cada tipo declarado, nunca por subcadena.

/// Conjunto cerrado de clases de documento reconocidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Sale,
    Cession,
    Declaration,
    Donation,
    Dowry,
    Arbitration,
    Correspondence,
    Unknown,
}

impl DocumentKind {
    /// Reconoce un nombre local (sin prefijo) ignorando mayúsculas.
    pub fn from_local_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "sale" | "purchase" | "salecontract" => Self::Sale,
            "cession" => Self::Cession,
            "declaration" => Self::Declaration,
            "donation" | "gift" => Self::Donation,
            "dowry" => Self::Dowry,
            "arbitration" | "arbitrationaward" => Self::Arbitration,
            "correspondence" | "letter" => Self::Correspondence,
            _ => Self::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

/// Parte final de un tipo tras el último `#`, `/` o `:`.
pub fn local_name(type_value: &str) -> &str {
    type_value.rsplit(['#', '/', ':']).next().unwrap_or(type_value)
}

/// Clasifica un registro por sus tipos declarados. El primer tipo
/// reconocido gana; si ninguno lo es, `Unknown`.
pub fn classify<'a, I>(types: I) -> DocumentKind
    where I: IntoIterator<Item = &'a str>
{
    types.into_iter()
         .map(|t| DocumentKind::from_local_name(local_name(t)))
         .find(|k| k.is_known())
         .unwrap_or(DocumentKind::Unknown)
}
