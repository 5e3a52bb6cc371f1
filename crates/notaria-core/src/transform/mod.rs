//! Transformadores de atajos.
//!
//! Cada transformador consume a lo sumo un predicado de atajo y produce o
//! extiende predicados del modelo destino. El contrato común vive en
//! [`ShortcutTransformer::transform`]: sin valor no hay cambios; con valor,
//! se expande y el atajo desaparece del registro (salvo que un transformador
//! polimórfico decline por tipo de documento desconocido).
//!
//! Las familias concretas son genéricas y parametrizadas; el catálogo que las
//! instancia está en [`crate::registry`].

pub mod annotation;
pub mod appellation;
pub mod link;
pub mod monetary;
pub mod receiving;
pub mod role;
pub mod time_span;

use log::{debug, warn};
use serde_json::Value;
use std::fmt;

use crate::config::ExpansionConfig;
use crate::dispatch::DocumentKind;
use crate::model::{elements, Record};
use crate::resolver::SharedSlot;

pub use annotation::NoteShortcut;
pub use appellation::AppellationShortcut;
pub use link::{LinkHost, LinkShortcut, LiteralShortcut};
pub use monetary::{AmountShortcut, CurrencyShortcut};
pub use receiving::ReceivingPartyShortcut;
pub use role::RoleShortcut;
pub use time_span::TimeSpanShortcut;

/// Fases del pipeline en orden de ejecución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Naming,
    Creation,
    PrimaryRole,
    SecondaryRole,
    Reference,
    Monetary,
    TypeFamily,
    Attestation,
    Annotation,
}

/// Nodo donde un transformador lee o escribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    Record,
    Slot(SharedSlot),
    TimeSpan(SharedSlot),
    SalesPrice,
}

/// Par (nodo, predicado) declarado por un transformador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub host: Host,
    pub predicate: &'static str,
}

impl Target {
    pub const fn on(host: Host, predicate: &'static str) -> Self {
        Self { host, predicate }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.host {
            Host::Record => write!(f, "{}", self.predicate),
            Host::Slot(s) => write!(f, "{}.{}", s.spec().suffix, self.predicate),
            Host::TimeSpan(s) => write!(f, "{}.time-span.{}", s.spec().suffix, self.predicate),
            Host::SalesPrice => write!(f, "sales-price.{}", self.predicate),
        }
    }
}

/// Resultado de expandir un atajo presente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Se aceptaron `n` elementos; el resto se descartó por mal formado.
    Applied(usize),
    /// El atajo se eliminó sin expansión (notas redactadas).
    Dropped,
    /// El atajo no aplica a este registro y se deja intacto.
    Declined,
}

/// Contexto por registro: configuración y clase de documento ya clasificada.
#[derive(Debug, Clone, Copy)]
pub struct RecordCtx<'a> {
    pub config: &'a ExpansionConfig,
    pub kind: DocumentKind,
}

impl<'a> RecordCtx<'a> {
    pub fn new(config: &'a ExpansionConfig, record: &Record) -> Self {
        Self { config, kind: record.kind() }
    }
}

pub trait ShortcutTransformer: Send + Sync + fmt::Debug {
    /// Predicado de atajo que consume.
    fn key(&self) -> &'static str;

    fn phase(&self) -> Phase;

    /// Predicados destino que produce o extiende.
    fn writes(&self) -> Vec<Target>;

    /// Predicados ya expandidos que consulta; quien los escribe debe ir antes.
    fn reads(&self) -> Vec<Target> {
        Vec::new()
    }

    /// Expande el valor crudo del atajo sobre el registro.
    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion;

    /// Expande el atajo si está presente y lo retira. Si el transformador
    /// declina, el registro queda tal cual, incluido el orden de claves.
    fn transform(&self, mut record: Record, ctx: &RecordCtx<'_>) -> Record {
        let key = self.key();
        let Some(raw) = record.get(key).cloned() else {
            return record;
        };
        match self.expand(&mut record, &raw, ctx) {
            Expansion::Applied(accepted) => {
                let skipped = elements(&raw).len().saturating_sub(accepted);
                if skipped > 0 {
                    warn!("{}: {} malformed element(s) skipped in {}", key, skipped, record.anchor());
                }
                debug!("{}: expanded {} element(s) in {}", key, accepted, record.anchor());
                record.take(key);
            }
            Expansion::Dropped => {
                debug!("{}: dropped from {}", key, record.anchor());
                record.take(key);
            }
            Expansion::Declined => debug!("{}: left untouched in {} ({:?})", key, record.anchor(), ctx.kind),
        }
        record
    }
}
