//! Actividades de rol: procurador, fiador, corredor, testigo, pagador, etc.
//!
//! Cada actor produce una `E7_Activity` dentro de `P9_consists_of` de la
//! estructura compartida, tipada con el término del rol. Las variantes de
//! procurador y fiador consultan además el actor ya expandido (vendedor o
//! comprador) para enlazarlo con `P17_was_motivated_by`; si el transformador
//! de ese actor no ha corrido antes, el enlace simplemente no aparece. El
//! registro valida ese orden al construirse.

use serde_json::{json, Value};

use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::constants::{class, predicate, ID};
use crate::hashing::mint_parts;
use crate::model::{elements, new_node, node_id, normalize_reference, push_unique, type_ref, Node, Record};
use crate::resolver::SharedSlot;
use crate::vocabulary::Term;

#[derive(Debug, Clone)]
pub struct RoleShortcut {
    key: &'static str,
    phase: Phase,
    slot: SharedSlot,
    role: Term,
    default_class: &'static str,
    motivated_by: Option<&'static str>,
}

impl RoleShortcut {
    pub const fn new(key: &'static str, phase: Phase, slot: SharedSlot, role: Term) -> Self {
        Self { key,
               phase,
               slot,
               role,
               default_class: class::PERSON,
               motivated_by: None }
    }

    /// Enlaza cada actividad con los actores ya presentes en `predicate` de
    /// la misma estructura.
    #[must_use]
    pub const fn motivated_by(mut self, predicate: &'static str) -> Self {
        self.motivated_by = Some(predicate);
        self
    }
}

/// Referencias (`{"id": ..}`) a los actores bajo `predicate` del nodo.
fn actor_refs(node: &Node, predicate: &str) -> Vec<Value> {
    let Some(value) = node.get(predicate) else {
        return Vec::new();
    };
    elements(value).into_iter()
                   .filter_map(Value::as_object)
                   .filter_map(node_id)
                   .map(|id| json!({ ID: id }))
                   .collect()
}

impl ShortcutTransformer for RoleShortcut {
    fn key(&self) -> &'static str {
        self.key
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn writes(&self) -> Vec<Target> {
        vec![Target::on(Host::Slot(self.slot), predicate::CONSISTS_OF)]
    }

    fn reads(&self) -> Vec<Target> {
        self.motivated_by
            .map(|p| Target::on(Host::Slot(self.slot), p))
            .into_iter()
            .collect()
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let actors: Vec<Node> = elements(raw).into_iter()
                                             .filter_map(|e| normalize_reference(e, self.default_class))
                                             .collect();
        if actors.is_empty() {
            return Expansion::Applied(0);
        }
        let role = type_ref(ctx.config.vocabulary.term(self.role));
        let parent = record.slot(self.slot, ctx.config, ctx.kind);
        let parent_id = node_id(parent).unwrap_or_default().to_string();
        let motives = match self.motivated_by {
            Some(p) => actor_refs(parent, p),
            None => Vec::new(),
        };
        let accepted = actors.len();
        for actor in actors {
            let actor_id = node_id(&actor).unwrap_or_default().to_string();
            let mut activity = new_node(mint_parts(&parent_id, &[self.key, actor_id.as_str()]), class::ACTIVITY);
            push_unique(&mut activity, predicate::CARRIED_OUT_BY, Value::Object(actor));
            push_unique(&mut activity, predicate::HAS_TYPE, role.clone());
            for motive in &motives {
                push_unique(&mut activity, predicate::WAS_MOTIVATED_BY, motive.clone());
            }
            push_unique(parent, predicate::CONSISTS_OF, Value::Object(activity));
        }
        Expansion::Applied(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpansionConfig;
    use crate::transform::LinkShortcut;
    use serde_json::json;

    fn guarantor() -> RoleShortcut {
        RoleShortcut::new("sellersGuarantor", Phase::SecondaryRole, SharedSlot::Acquisition, Term::Guarantor)
            .motivated_by(predicate::TRANSFERRED_TITLE_FROM)
    }

    fn seller() -> LinkShortcut {
        LinkShortcut::on_slot("seller",
                              Phase::PrimaryRole,
                              SharedSlot::Acquisition,
                              predicate::TRANSFERRED_TITLE_FROM,
                              class::PERSON)
    }

    fn run(ts: &[&dyn ShortcutTransformer], v: Value) -> Value {
        let cfg = ExpansionConfig::default();
        let mut record = Record::from_value(v).expect("record");
        let ctx = RecordCtx::new(&cfg, &record);
        for t in ts {
            record = t.transform(record, &ctx);
        }
        record.into_value()
    }

    #[test]
    fn guarantor_after_seller_is_motivated_by_seller() {
        let out = run(&[&seller(), &guarantor()],
                      json!({"id": "contract:1", "seller": ["person:A"], "sellersGuarantor": ["person:C"]}));
        let acq = &out["P70_documents"][0];
        let role = &acq["P9_consists_of"][0];
        assert_eq!(role["type"], json!("E7_Activity"));
        assert_eq!(role["P14_carried_out_by"][0]["id"], json!("person:C"));
        assert_eq!(role["P2_has_type"][0]["id"], json!("nt:role/guarantor"));
        assert_eq!(role["P17_was_motivated_by"], json!([{"id": "person:A"}]));
    }

    #[test]
    fn guarantor_before_seller_loses_motivation() {
        let out = run(&[&guarantor(), &seller()],
                      json!({"id": "contract:1", "seller": ["person:A"], "sellersGuarantor": ["person:C"]}));
        let role = &out["P70_documents"][0]["P9_consists_of"][0];
        assert!(role.get("P17_was_motivated_by").is_none());
        assert_eq!(out["P70_documents"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn one_activity_per_actor_with_distinct_ids() {
        let broker = RoleShortcut::new("broker", Phase::SecondaryRole, SharedSlot::Acquisition, Term::Broker);
        let out = run(&[&broker], json!({"id": "contract:1", "broker": ["person:M", "person:N", ""]}));
        let roles = out["P70_documents"][0]["P9_consists_of"].as_array().cloned().unwrap_or_default();
        assert_eq!(roles.len(), 2);
        assert_ne!(roles[0]["id"], roles[1]["id"]);
        assert!(roles.iter().all(|r| r.get("P17_was_motivated_by").is_none()));
    }
}
