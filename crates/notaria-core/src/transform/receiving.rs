//! `receivingParty`: atajo polimórfico.
//!
//! | documento | destino |
//! |---|---|
//! | donación, dote | adquisición, `P22_transferred_title_to` |
//! | declaración | actividad, `P11_had_participant` |
//! | cesión | actividad, `P14_carried_out_by` |
//!
//! Para cualquier otro tipo el atajo queda sin transformar. Corre con los
//! roles primarios porque el procurador y el fiador del comprador leen
//! `P22_transferred_title_to`.

use serde_json::Value;

use super::link::{attach, LinkHost};
use super::{Expansion, Host, Phase, RecordCtx, ShortcutTransformer, Target};
use crate::constants::{class, predicate};
use crate::dispatch::DocumentKind;
use crate::model::{elements, normalize_reference, Node, Record};
use crate::resolver::SharedSlot;

#[derive(Debug, Clone, Default)]
pub struct ReceivingPartyShortcut;

impl ReceivingPartyShortcut {
    pub const KEY: &'static str = "receivingParty";

    /// Ranura y predicado destino según la clase de documento.
    pub fn target(kind: DocumentKind) -> Option<(SharedSlot, &'static str)> {
        match kind {
            DocumentKind::Donation | DocumentKind::Dowry => {
                Some((SharedSlot::Acquisition, predicate::TRANSFERRED_TITLE_TO))
            }
            DocumentKind::Declaration => Some((SharedSlot::Activity, predicate::HAD_PARTICIPANT)),
            DocumentKind::Cession => Some((SharedSlot::Activity, predicate::CARRIED_OUT_BY)),
            _ => None,
        }
    }
}

impl ShortcutTransformer for ReceivingPartyShortcut {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn phase(&self) -> Phase {
        Phase::PrimaryRole
    }

    fn writes(&self) -> Vec<Target> {
        vec![Target::on(Host::Slot(SharedSlot::Acquisition), predicate::TRANSFERRED_TITLE_TO),
             Target::on(Host::Slot(SharedSlot::Activity), predicate::HAD_PARTICIPANT),
             Target::on(Host::Slot(SharedSlot::Activity), predicate::CARRIED_OUT_BY)]
    }

    fn expand(&self, record: &mut Record, raw: &Value, ctx: &RecordCtx<'_>) -> Expansion {
        let Some((slot, predicate)) = Self::target(ctx.kind) else {
            return Expansion::Declined;
        };
        let parties: Vec<Node> = elements(raw).into_iter()
                                              .filter_map(|e| normalize_reference(e, class::PERSON))
                                              .collect();
        let accepted = parties.len();
        attach(record, LinkHost::Slot(slot), predicate, parties, ctx);
        Expansion::Applied(accepted)
    }
}
