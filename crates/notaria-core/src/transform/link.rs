//! Atajos de enlace simple: cada elemento se normaliza a una referencia
//! tipada y se añade a un predicado de lista, en el propio registro o en una
//! ranura compartida.

use serde_json::Value;

use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::model::{elements, literal, normalize_reference, push_unique, Node, Record};
use crate::resolver::SharedSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkHost {
    Record,
    Slot(SharedSlot),
}

#[derive(Debug, Clone)]
pub struct LinkShortcut {
    key: &'static str,
    phase: Phase,
    host: LinkHost,
    predicate: &'static str,
    default_class: &'static str,
}

impl LinkShortcut {
    pub const fn on_record(key: &'static str, phase: Phase, predicate: &'static str, default_class: &'static str) -> Self {
        Self { key,
               phase,
               host: LinkHost::Record,
               predicate,
               default_class }
    }

    pub const fn on_slot(key: &'static str,
                         phase: Phase,
                         slot: SharedSlot,
                         predicate: &'static str,
                         default_class: &'static str)
                         -> Self {
        Self { key,
               phase,
               host: LinkHost::Slot(slot),
               predicate,
               default_class }
    }
}

/// Añade referencias ya normalizadas al anfitrión. No toca la ranura si no
/// hay nada que añadir.
pub(crate) fn attach(record: &mut Record, host: LinkHost, predicate: &str, refs: Vec<Node>, ctx: &RecordCtx<'_>) {
    if refs.is_empty() {
        return;
    }
    match host {
        LinkHost::Record => {
            for r in refs {
                record.push(predicate, Value::Object(r));
            }
        }
        LinkHost::Slot(slot) => {
            let node = record.slot(slot, ctx.config, ctx.kind);
            for r in refs {
                push_unique(node, predicate, Value::Object(r));
            }
        }
    }
}

impl ShortcutTransformer for LinkShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn writes(&self) -> Vec<Target> {
        let host = match self.host {
            LinkHost::Record => Host::Record,
            LinkHost::Slot(slot) => Host::Slot(slot),
        };
        vec![Target::on(host, self.predicate)]
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let refs: Vec<Node> = elements(raw).into_iter()
                                           .filter_map(|e| normalize_reference(e, self.default_class))
                                           .collect();
        let accepted = refs.len();
        attach(record, self.host, self.predicate, refs, ctx);
        Expansion::Applied(accepted)
    }
}

/// Atajo de literal plano (p.ej. `description` → `P3_has_note`).
#[derive(Debug, Clone)]
pub struct LiteralShortcut {
    key: &'static str,
    phase: Phase,
    predicate: &'static str,
}

impl LiteralShortcut {
    pub const fn new(key: &'static str, phase: Phase, predicate: &'static str) -> Self {
        Self { key, phase, predicate }
    }
}

impl ShortcutTransformer for LiteralShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn writes(&self) -> Vec<Target> {
        vec![Target::on(Host::Record, self.predicate)]
    }

    fn expand(&self, record: &mut Record, raw: &Value, _ctx: &RecordCtx<'_>) -> Expansion {
        let texts: Vec<String> = elements(raw).into_iter().filter_map(literal).collect();
        let accepted = texts.len();
        for text in texts {
            record.push(self.predicate, Value::String(text));
        }
        Expansion::Applied(accepted)
    }
}
