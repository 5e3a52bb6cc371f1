//! Catálogo estándar de transformadores, en orden de ejecución.
//!
//! El orden es explícito y agrupado por fase: nombres → creación → roles
//! primarios (incluido el polimórfico `receivingParty`) → roles secundarios → referencias → importes → familias por
//! tipo de documento → atestación/familia/grupo → notas. Las dependencias
//! de lectura (p.ej. fiador del vendedor sobre `P23`) se declaran en cada
//! transformador y [`crate::pipeline::ExpansionPipeline::new`] las verifica.

use crate::constants::{class, predicate as p};
use crate::resolver::SharedSlot::{Acquisition, Activity, Birth, Creation, Death};
use crate::transform::Phase::{Attestation, PrimaryRole, Reference, SecondaryRole, TypeFamily};
use crate::transform::{AmountShortcut, AppellationShortcut, CurrencyShortcut, LinkShortcut, LiteralShortcut,
                       NoteShortcut, Phase, ReceivingPartyShortcut, RoleShortcut, ShortcutTransformer,
                       TimeSpanShortcut};
use crate::vocabulary::Term;

pub fn standard_transformers() -> Vec<Box<dyn ShortcutTransformer>> {
    let mut t: Vec<Box<dyn ShortcutTransformer>> = Vec::with_capacity(64);

    // nombres y títulos
    t.push(Box::new(AppellationShortcut::new("name", p::IS_IDENTIFIED_BY, class::APPELLATION, Term::Name)));
    t.push(Box::new(AppellationShortcut::new("alternativeName",
                                             p::IS_IDENTIFIED_BY,
                                             class::APPELLATION,
                                             Term::AlternativeName)));
    t.push(Box::new(AppellationShortcut::new("title", p::HAS_TITLE, class::TITLE, Term::Title)));
    t.push(Box::new(AppellationShortcut::new("shelfmark", p::IS_IDENTIFIED_BY, class::IDENTIFIER, Term::Shelfmark)));
    t.push(Box::new(LiteralShortcut::new("description", Phase::Naming, p::HAS_NOTE)));

    // creación del documento
    t.push(Box::new(LinkShortcut::on_slot("createdBy", Phase::Creation, Creation, p::CARRIED_OUT_BY, class::PERSON)));
    t.push(Box::new(TimeSpanShortcut::new("enactedOn", Phase::Creation, Creation)));
    t.push(Box::new(LinkShortcut::on_slot("enactedAt", Phase::Creation, Creation, p::TOOK_PLACE_AT, class::PLACE)));
    t.push(Box::new(RoleShortcut::new("notary", Phase::Creation, Creation, Term::Notary)));
    t.push(Box::new(RoleShortcut::new("witness", Phase::Creation, Creation, Term::Witness)));
    t.push(Box::new(LinkShortcut::on_record("language", Phase::Creation, p::HAS_LANGUAGE, class::LANGUAGE)));

    // roles primarios de la adquisición
    for key in ["seller", "donor", "dowryGiver"] {
        t.push(Box::new(LinkShortcut::on_slot(key, PrimaryRole, Acquisition, p::TRANSFERRED_TITLE_FROM, class::PERSON)));
    }
    t.push(Box::new(LinkShortcut::on_slot("buyer", PrimaryRole, Acquisition, p::TRANSFERRED_TITLE_TO, class::PERSON)));
    t.push(Box::new(ReceivingPartyShortcut));
    for key in ["transferredObject", "donatedObject", "dowryObject"] {
        t.push(Box::new(LinkShortcut::on_slot(key,
                                              PrimaryRole,
                                              Acquisition,
                                              p::TRANSFERRED_TITLE_OF,
                                              class::HUMAN_MADE_OBJECT)));
    }

    // roles secundarios
    t.push(Box::new(RoleShortcut::new("sellersProcurator", SecondaryRole, Acquisition, Term::Procurator)
                        .motivated_by(p::TRANSFERRED_TITLE_FROM)));
    t.push(Box::new(RoleShortcut::new("buyersProcurator", SecondaryRole, Acquisition, Term::Procurator)
                        .motivated_by(p::TRANSFERRED_TITLE_TO)));
    t.push(Box::new(RoleShortcut::new("sellersGuarantor", SecondaryRole, Acquisition, Term::Guarantor)
                        .motivated_by(p::TRANSFERRED_TITLE_FROM)));
    t.push(Box::new(RoleShortcut::new("buyersGuarantor", SecondaryRole, Acquisition, Term::Guarantor)
                        .motivated_by(p::TRANSFERRED_TITLE_TO)));
    t.push(Box::new(RoleShortcut::new("broker", SecondaryRole, Acquisition, Term::Broker)));
    t.push(Box::new(RoleShortcut::new("payer", SecondaryRole, Acquisition, Term::Payer)));
    t.push(Box::new(RoleShortcut::new("payee", SecondaryRole, Acquisition, Term::Payee)));

    // referencias genéricas
    t.push(Box::new(LinkShortcut::on_record("referencedPerson", Reference, p::REFERS_TO, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_record("referencedPlace", Reference, p::REFERS_TO, class::PLACE)));
    t.push(Box::new(LinkShortcut::on_record("referencedObject", Reference, p::REFERS_TO, class::HUMAN_MADE_OBJECT)));
    t.push(Box::new(LinkShortcut::on_record("referencedOrganization", Reference, p::REFERS_TO, class::GROUP)));
    t.push(Box::new(LinkShortcut::on_record("subject", Reference, p::IS_ABOUT, class::TYPE)));

    // importes
    t.push(Box::new(AmountShortcut::new("saleAmount")));
    t.push(Box::new(CurrencyShortcut::new("saleCurrency")));

    // familias por tipo de documento
    t.push(Box::new(LinkShortcut::on_slot("arbitrator", TypeFamily, Activity, p::CARRIED_OUT_BY, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("disputingParty", TypeFamily, Activity, p::HAD_PARTICIPANT, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("cedingParty", TypeFamily, Activity, p::HAD_PARTICIPANT, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("cededRight", TypeFamily, Activity, p::USED_SPECIFIC_OBJECT, class::RIGHT)));
    t.push(Box::new(LinkShortcut::on_slot("declarant", TypeFamily, Activity, p::CARRIED_OUT_BY, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("declaredObject",
                                          TypeFamily,
                                          Activity,
                                          p::USED_SPECIFIC_OBJECT,
                                          class::HUMAN_MADE_OBJECT)));
    t.push(Box::new(LinkShortcut::on_slot("sender", TypeFamily, Activity, p::CARRIED_OUT_BY, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("recipient", TypeFamily, Activity, p::HAD_PARTICIPANT, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("sentFrom", TypeFamily, Activity, p::TOOK_PLACE_AT, class::PLACE)));
    t.push(Box::new(RoleShortcut::new("bride", TypeFamily, Acquisition, Term::Bride)
                        .motivated_by(p::TRANSFERRED_TITLE_TO)));

    // atestación, representación, familia y grupos
    t.push(Box::new(LinkShortcut::on_record("attestedIn", Attestation, p::IS_REFERRED_TO_BY, class::DOCUMENT)));
    t.push(Box::new(LinkShortcut::on_record("representation",
                                            Attestation,
                                            p::HAS_REPRESENTATION,
                                            class::VISUAL_ITEM)));
    t.push(Box::new(LinkShortcut::on_record("depicts", Attestation, p::DEPICTS, class::ENTITY)));
    t.push(Box::new(LinkShortcut::on_slot("father", Attestation, Birth, p::FROM_FATHER, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_slot("mother", Attestation, Birth, p::BY_MOTHER, class::PERSON)));
    t.push(Box::new(TimeSpanShortcut::new("birthDate", Attestation, Birth)));
    t.push(Box::new(LinkShortcut::on_slot("birthPlace", Attestation, Birth, p::TOOK_PLACE_AT, class::PLACE)));
    t.push(Box::new(TimeSpanShortcut::new("deathDate", Attestation, Death)));
    t.push(Box::new(LinkShortcut::on_slot("deathPlace", Attestation, Death, p::TOOK_PLACE_AT, class::PLACE)));
    t.push(Box::new(LinkShortcut::on_record("memberOf", Attestation, p::IS_MEMBER_OF, class::GROUP)));
    t.push(Box::new(LinkShortcut::on_record("hasMember", Attestation, p::HAS_MEMBER, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_record("locatedIn", Attestation, p::FALLS_WITHIN, class::PLACE)));
    t.push(Box::new(LinkShortcut::on_record("owner", Attestation, p::HAS_CURRENT_OWNER, class::PERSON)));
    t.push(Box::new(LinkShortcut::on_record("keeper", Attestation, p::HAS_CURRENT_KEEPER, class::GROUP)));
    t.push(Box::new(LinkShortcut::on_record("material", Attestation, p::CONSISTS_OF_MATERIAL, class::MATERIAL)));

    // notas, siempre al final
    t.push(Box::new(NoteShortcut::new("editorialNote", Term::EditorialNote)));
    t.push(Box::new(NoteShortcut::new("internalNote", Term::InternalNote)));

    t
}
