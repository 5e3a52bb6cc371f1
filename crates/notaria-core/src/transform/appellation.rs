//! Familia de nombres: `name`, `alternativeName`, `title`, `shelfmark`.
//!
//! Un nodo de apelación por valor. El identificador se acuña con
//! (ancla del registro, valor, atajo) para que dos atajos distintos con el
//! mismo literal no colisionen.

use serde_json::Value;

use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::constants::predicate;
use crate::hashing::mint_parts;
use crate::model::{elements, literal, new_node, push_unique, type_ref, Node, Record};
use crate::vocabulary::Term;

#[derive(Debug, Clone)]
pub struct AppellationShortcut {
    key: &'static str,
    predicate: &'static str,
    class: &'static str,
    term: Term,
}

impl AppellationShortcut {
    pub const fn new(key: &'static str, predicate: &'static str, class: &'static str, term: Term) -> Self {
        Self { key,
               predicate,
               class,
               term }
    }
}

/// Nodo lingüístico tipado con contenido simbólico; compartido con las notas.
pub(crate) fn symbolic_node(anchor: &str, key: &str, content: &str, class: &str, term: &str) -> Node {
    let mut node = new_node(mint_parts(anchor, &[content, key]), class);
    push_unique(&mut node, predicate::HAS_TYPE, type_ref(term));
    node.insert(predicate::HAS_SYMBOLIC_CONTENT.to_string(), Value::String(content.to_string()));
    node
}

impl ShortcutTransformer for AppellationShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        Phase::Naming
    }

    fn writes(&self) -> Vec<Target> {
        vec![Target::on(Host::Record, self.predicate)]
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let term = ctx.config.vocabulary.term(self.term);
        let anchor = record.anchor().to_string();
        let mut accepted = 0;
        for content in elements(raw).into_iter().filter_map(literal) {
            record.push(self.predicate,
                        Value::Object(symbolic_node(&anchor, self.key, &content, self.class, term)));
            accepted += 1;
        }
        Expansion::Applied(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpansionConfig;
    use crate::constants::class;
    use serde_json::json;

    fn run(t: &AppellationShortcut, v: Value) -> Value {
        let cfg = ExpansionConfig::default();
        let record = Record::from_value(v).expect("record");
        let ctx = RecordCtx::new(&cfg, &record);
        t.transform(record, &ctx).into_value()
    }

    #[test]
    fn name_becomes_typed_appellation() {
        let t = AppellationShortcut::new("name", predicate::IS_IDENTIFIED_BY, class::APPELLATION, Term::Name);
        let out = run(&t, json!({"id": "contract:misc001", "name": "Unclassified contract from 1450"}));
        let app = &out["P1_is_identified_by"][0];
        assert_eq!(app["id"], json!(mint_parts("contract:misc001", &["Unclassified contract from 1450", "name"])));
        assert_eq!(app["type"], json!("E41_Appellation"));
        assert_eq!(app["P2_has_type"][0]["id"], json!("nt:appellation/name"));
        assert_eq!(app["P190_has_symbolic_content"], json!("Unclassified contract from 1450"));
        assert!(out.get("name").is_none());
    }

    #[test]
    fn same_literal_under_two_keys_does_not_collide() {
        let name = AppellationShortcut::new("name", predicate::IS_IDENTIFIED_BY, class::APPELLATION, Term::Name);
        let alt = AppellationShortcut::new("alternativeName",
                                           predicate::IS_IDENTIFIED_BY,
                                           class::APPELLATION,
                                           Term::AlternativeName);
        let out = run(&name, json!({"id": "person:1", "name": "Giovanni", "alternativeName": "Giovanni"}));
        let out = run(&alt, out);
        let apps = out["P1_is_identified_by"].as_array().cloned().unwrap_or_default();
        assert_eq!(apps.len(), 2);
        assert_ne!(apps[0]["id"], apps[1]["id"]);
    }
}
