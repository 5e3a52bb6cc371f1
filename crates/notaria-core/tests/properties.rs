#![recursion_limit = "256"]

use notaria_core::transform::LinkShortcut;
use notaria_core::{ExpansionConfig, ExpansionPipeline, Phase, Record, RecordCtx, SalesPriceProperty, SharedSlot,
                   ShortcutTransformer};
use serde_json::{json, Value};

fn pipeline() -> ExpansionPipeline {
    ExpansionPipeline::standard().expect("standard registry")
}

/// Un registro de venta con todos los atajos del catálogo salvo
/// `receivingParty`, que en una venta no aplica y quedaría residual.
fn kitchen_sink() -> Value {
    json!({"id": "contract:all",
           "type": ["Document", "Sale"],
           "name": "Vendita di una casa",
           "alternativeName": ["Casa in Carignano"],
           "title": "Instrumentum venditionis",
           "shelfmark": "ASG, Notai antichi 812",
           "description": "Copia autentica",
           "createdBy": "person:notary1",
           "enactedOn": ["1450-05", "1450-06-02"],
           "enactedAt": "place:genoa",
           "notary": "person:notary1",
           "witness": ["person:w1", "person:w2"],
           "language": "language:latin",
           "seller": ["person:A"],
           "donor": [],
           "dowryGiver": null,
           "buyer": [{"id": "group:arte", "type": "E74_Group"}],
           "transferredObject": "object:house",
           "donatedObject": [],
           "dowryObject": [],
           "sellersProcurator": "person:P1",
           "buyersProcurator": "person:P2",
           "sellersGuarantor": "person:G1",
           "buyersGuarantor": "person:G2",
           "broker": "person:M",
           "payer": "person:B",
           "payee": "person:A",
           "referencedPerson": "person:R",
           "referencedPlace": "place:savona",
           "referencedObject": "object:deed",
           "referencedOrganization": "group:commune",
           "subject": "type:real-estate",
           "saleAmount": "250",
           "saleCurrency": "currency:lira",
           "arbitrator": [],
           "disputingParty": [],
           "cedingParty": [],
           "cededRight": [],
           "declarant": [],
           "declaredObject": [],
           "sender": [],
           "recipient": [],
           "sentFrom": [],
           "bride": [],
           "attestedIn": "document:register-1450",
           "representation": "image:f12r",
           "depicts": [],
           "father": [],
           "mother": [],
           "birthDate": [],
           "birthPlace": [],
           "deathDate": [],
           "deathPlace": [],
           "memberOf": [],
           "hasMember": [],
           "locatedIn": [],
           "owner": [],
           "keeper": [],
           "material": [],
           "editorialNote": "Transcribed 2021",
           "internalNote": "check folio"})
}

#[test]
fn full_pass_leaves_no_shortcut_keys() {
    let p = pipeline();
    let input = kitchen_sink();
    let catalogue: Vec<&str> = p.shortcut_keys().collect();
    let present = input.as_object().map(|o| o.keys().filter(|k| catalogue.contains(&k.as_str())).count());
    assert_eq!(present, Some(p.len() - 1));

    let record = p.transform_record(Record::from_value(input).expect("record"), &ExpansionConfig::default());
    assert!(p.residual_keys(&record).is_empty());
    assert!(record.get("P67i_is_referred_to_by").is_some());
}

#[test]
fn absent_shortcut_is_a_no_op() {
    let cfg = ExpansionConfig::default();
    let input = json!({"id": "person:1", "type": "E21_Person", "P3_has_note": ["kept"]});
    let p = pipeline();
    for key in p.shortcut_keys() {
        let t = p.transformer(key).expect("registered");
        let record = Record::from_value(input.clone()).expect("record");
        let ctx = RecordCtx::new(&cfg, &record);
        assert_eq!(t.transform(record, &ctx).into_value(), input, "{key}");
    }
}

#[test]
fn output_is_deterministic_across_runs_and_modes() {
    let batch = json!([kitchen_sink(), kitchen_sink(), {"type": "Dowry", "receivingParty": "person:X"}]);
    let parallel = pipeline().transform_collection(batch.clone(), &ExpansionConfig::default())
                             .expect("batch");
    let sequential = pipeline().transform_collection(batch, &ExpansionConfig::default().sequential())
                               .expect("batch");
    assert_eq!(serde_json::to_string(&parallel.output).ok(), serde_json::to_string(&sequential.output).ok());
    assert_eq!(parallel.report, sequential.report);
}

#[test]
fn second_pass_is_a_no_op() {
    let cfg = ExpansionConfig::default().with_internal_annotations(true);
    let once = pipeline().transform_value(kitchen_sink(), &cfg).expect("record");
    let twice = pipeline().transform_value(once.clone(), &cfg).expect("record");
    assert_eq!(once, twice);
}

#[test]
fn procurator_motivation_matches_expanded_seller() {
    let out = pipeline().transform_value(json!({"id": "contract:p", "sellersProcurator": ["person:P"],
                                                "seller": ["person:S"]}),
                                         &ExpansionConfig::default())
                        .expect("record");
    let acq = &out["P70_documents"][0];
    let seller_id = acq["P23_transferred_title_from"][0]["id"].clone();
    assert_eq!(seller_id, json!("person:S"));
    assert_eq!(acq["P9_consists_of"][0]["P17_was_motivated_by"][0]["id"], seller_id);
}

#[test]
fn receiving_party_shapes_are_distinct_per_kind() {
    let p = pipeline();
    let cfg = ExpansionConfig::default();
    let shapes: Vec<Value> =
        ["Cession", "Declaration", "Donation", "Dowry"].iter()
                                                       .map(|kind| json!({"id": "doc:rp", "type": kind, "receivingParty": ["person:X"]}))
                                                       .map(|v| p.transform_value(v, &cfg).expect("record"))
                                                       .collect();
    for (i, a) in shapes.iter().enumerate() {
        assert!(a.get("receivingParty").is_none());
        for b in shapes.iter().skip(i + 1) {
            assert_ne!(a["P70_documents"], b["P70_documents"]);
        }
    }
    assert_eq!(shapes[0]["P70_documents"][0]["P14_carried_out_by"][0]["id"], json!("person:X"));
    assert_eq!(shapes[1]["P70_documents"][0]["P11_had_participant"][0]["id"], json!("person:X"));
    assert_eq!(shapes[2]["P70_documents"][0]["P2_has_type"][0]["id"], json!("nt:document/donation"));
    assert_eq!(shapes[3]["P70_documents"][0]["P2_has_type"][0]["id"], json!("nt:document/dowry"));
}

#[test]
fn legacy_sales_price_property_is_honoured() {
    let cfg = ExpansionConfig::default().with_sales_price_property(SalesPriceProperty::HasDimension);
    let out = pipeline().transform_value(json!({"id": "contract:s", "saleAmount": 12}), &cfg).expect("record");
    let acq = &out["P70_documents"][0];
    assert!(acq.get("P179_had_sales_price").is_none());
    assert_eq!(acq["P43_has_dimension"][0]["P181_has_amount"], json!(12));
}

#[test]
fn internal_notes_are_dropped_by_default() {
    let out = pipeline().transform_value(json!({"id": "person:n", "internalNote": "check", "editorialNote": "ok"}),
                                         &ExpansionConfig::default())
                        .expect("record");
    assert_eq!(out, json!({"id": "person:n"}));
}

#[test]
fn custom_registry_orders_are_validated() {
    let buyer = LinkShortcut::on_slot("buyer",
                                      Phase::PrimaryRole,
                                      SharedSlot::Acquisition,
                                      "P22_transferred_title_to",
                                      "E21_Person");
    let boxed: Vec<Box<dyn ShortcutTransformer>> = vec![Box::new(buyer)];
    let p = ExpansionPipeline::new(boxed).expect("single transformer");
    assert_eq!(p.describe()[0].writes, vec!["acquisition.P22_transferred_title_to".to_string()]);
}

#[test]
fn expansion_keeps_remaining_key_order() {
    let out = pipeline().transform_value(json!({"id": "c", "type": "Contract", "name": "n", "a": 1, "b": 2, "c": 3}),
                                         &ExpansionConfig::default())
                        .expect("record");
    let keys: Vec<&str> = out.as_object().map(|o| o.keys().map(String::as_str).collect()).unwrap_or_default();
    assert_eq!(keys, vec!["id", "type", "a", "b", "c", "P1_is_identified_by"]);
}

#[test]
fn already_expanded_structures_are_reused() {
    let out = pipeline().transform_value(json!({"id": "c",
                                                "P94i_was_created_by": [{"id": "creation:given"}],
                                                "P70_documents": [{"id": "acq:given", "type": "crm:E8_Acquisition"}],
                                                "createdBy": "person:g",
                                                "seller": "person:A"}),
                                         &ExpansionConfig::default())
                        .expect("record");
    let creations = out["P94i_was_created_by"].as_array().cloned().unwrap_or_default();
    assert_eq!(creations.len(), 1);
    assert_eq!(creations[0]["id"], json!("creation:given"));
    assert_eq!(creations[0]["P14_carried_out_by"][0]["id"], json!("person:g"));
    let docs = out["P70_documents"].as_array().cloned().unwrap_or_default();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["P23_transferred_title_from"][0]["id"], json!("person:A"));
}
