//! Notas editoriales e internas: se expanden o se eliminan según
//! `include_internal_annotations`. Es el único transformador cuyo efecto
//! depende de configuración y no sólo de datos.

use serde_json::Value;

use super::appellation::symbolic_node;
use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::constants::{class, predicate};
use crate::model::{elements, literal, Record};
use crate::vocabulary::Term;

#[derive(Debug, Clone)]
pub struct NoteShortcut {
    key: &'static str,
    term: Term,
}

impl NoteShortcut {
    pub const fn new(key: &'static str, term: Term) -> Self {
        Self { key, term }
    }
}

impl ShortcutTransformer for NoteShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        Phase::Annotation
    }

    fn writes(&self) -> Vec<Target> {
        vec![Target::on(Host::Record, predicate::IS_REFERRED_TO_BY)]
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        if !ctx.config.include_internal_annotations {
            return Expansion::Dropped;
        }
        let term = ctx.config.vocabulary.term(self.term);
        let anchor = record.anchor().to_string();
        let mut accepted = 0;
        for text in elements(raw).into_iter().filter_map(literal) {
            let note = symbolic_node(&anchor, self.key, &text, class::LINGUISTIC_OBJECT, term);
            record.push(predicate::IS_REFERRED_TO_BY, Value::Object(note));
            accepted += 1;
        }
        Expansion::Applied(accepted)
    }
}
