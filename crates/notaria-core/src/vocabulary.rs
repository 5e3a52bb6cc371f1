//! Términos de vocabulario controlado.
//!
//! El motor no conoce el catálogo completo de la ontología destino: recibe
//! los identificadores de tipos de apelación, roles, notas y clases de
//! documento como cadenas opacas. Los valores por defecto usan el prefijo
//! `nt:` y pueden sustituirse desde un fichero JSON (ver `ExpansionConfig`).

use serde::{Deserialize, Serialize};

use crate::dispatch::DocumentKind;

/// Clave de un término del vocabulario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    Name,
    AlternativeName,
    Title,
    Shelfmark,
    Notary,
    Witness,
    Procurator,
    Guarantor,
    Broker,
    Payer,
    Payee,
    Bride,
    EditorialNote,
    InternalNote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub name: String,
    pub alternative_name: String,
    pub title: String,
    pub shelfmark: String,
    pub notary: String,
    pub witness: String,
    pub procurator: String,
    pub guarantor: String,
    pub broker: String,
    pub payer: String,
    pub payee: String,
    pub bride: String,
    pub editorial_note: String,
    pub internal_note: String,
    pub sale: String,
    pub cession: String,
    pub declaration: String,
    pub donation: String,
    pub dowry: String,
    pub arbitration: String,
    pub correspondence: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self { name: "nt:appellation/name".into(),
               alternative_name: "nt:appellation/alternative-name".into(),
               title: "nt:appellation/title".into(),
               shelfmark: "nt:appellation/shelfmark".into(),
               notary: "nt:role/notary".into(),
               witness: "nt:role/witness".into(),
               procurator: "nt:role/procurator".into(),
               guarantor: "nt:role/guarantor".into(),
               broker: "nt:role/broker".into(),
               payer: "nt:role/payer".into(),
               payee: "nt:role/payee".into(),
               bride: "nt:role/bride".into(),
               editorial_note: "nt:note/editorial".into(),
               internal_note: "nt:note/internal".into(),
               sale: "nt:document/sale".into(),
               cession: "nt:document/cession".into(),
               declaration: "nt:document/declaration".into(),
               donation: "nt:document/donation".into(),
               dowry: "nt:document/dowry".into(),
               arbitration: "nt:document/arbitration".into(),
               correspondence: "nt:document/correspondence".into() }
    }
}

impl Vocabulary {
    pub fn term(&self, term: Term) -> &str {
        match term {
            Term::Name => &self.name,
            Term::AlternativeName => &self.alternative_name,
            Term::Title => &self.title,
            Term::Shelfmark => &self.shelfmark,
            Term::Notary => &self.notary,
            Term::Witness => &self.witness,
            Term::Procurator => &self.procurator,
            Term::Guarantor => &self.guarantor,
            Term::Broker => &self.broker,
            Term::Payer => &self.payer,
            Term::Payee => &self.payee,
            Term::Bride => &self.bride,
            Term::EditorialNote => &self.editorial_note,
            Term::InternalNote => &self.internal_note,
        }
    }

    /// Término de tipo para la clase de documento; `None` si no se reconoce.
    pub fn document_kind(&self, kind: DocumentKind) -> Option<&str> {
        match kind {
            DocumentKind::Sale => Some(&self.sale),
            DocumentKind::Cession => Some(&self.cession),
            DocumentKind::Declaration => Some(&self.declaration),
            DocumentKind::Donation => Some(&self.donation),
            DocumentKind::Dowry => Some(&self.dowry),
            DocumentKind::Arbitration => Some(&self.arbitration),
            DocumentKind::Correspondence => Some(&self.correspondence),
            DocumentKind::Unknown => None,
        }
    }
}
