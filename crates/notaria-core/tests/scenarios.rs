use notaria_core::{mint, ExpansionConfig, ExpansionPipeline, Record};
use serde_json::{json, Value};

fn pipeline() -> ExpansionPipeline {
    ExpansionPipeline::standard().expect("standard registry")
}

fn expand(v: Value) -> Value {
    pipeline().transform_value(v, &ExpansionConfig::default()).expect("record")
}

fn misc_contract() -> Value {
    json!({"id": "contract:misc001",
           "type": "Contract",
           "name": "Unclassified contract from 1450",
           "createdBy": "person:giovanni",
           "enactedOn": "1450-05-20",
           "enactedAt": "place:genoa"})
}

#[test]
fn unclassified_contract_expands_name_and_creation() {
    let out = expand(misc_contract());

    let app = &out["P1_is_identified_by"][0];
    assert_eq!(app["type"], json!("E41_Appellation"));
    assert_eq!(app["P190_has_symbolic_content"], json!("Unclassified contract from 1450"));

    let creation = &out["P94i_was_created_by"][0];
    assert_eq!(creation["id"], json!(mint("contract:misc001", "creation")));
    assert_eq!(creation["type"], json!("E65_Creation"));
    assert_eq!(creation["P14_carried_out_by"], json!([{"id": "person:giovanni", "type": "E21_Person"}]));
    assert_eq!(creation["P7_took_place_at"], json!([{"id": "place:genoa", "type": "E53_Place"}]));

    let span = &creation["P4_has_time-span"][0];
    assert_eq!(span["P82_at_some_time_within"], json!(["1450-05-20"]));
    assert_eq!(span["P82a_begin_of_the_begin"], json!("1450-05-20T00:00:00"));
    assert_eq!(span["P82b_end_of_the_end"], json!("1450-05-20T23:59:59"));

    let record = Record::from_value(out).expect("record");
    assert!(pipeline().residual_keys(&record).is_empty());
}

#[test]
fn sale_shares_one_acquisition_between_parties_and_guarantor() {
    let out = expand(json!({"id": "contract:sale7",
                            "type": "Sale",
                            "seller": ["person:A"],
                            "buyer": ["person:B"],
                            "sellersGuarantor": ["person:C"]}));
    let docs = out["P70_documents"].as_array().cloned().unwrap_or_default();
    assert_eq!(docs.len(), 1);
    let acq = &docs[0];
    assert_eq!(acq["type"], json!("E8_Acquisition"));
    assert_eq!(acq["P23_transferred_title_from"][0]["id"], json!("person:A"));
    assert_eq!(acq["P22_transferred_title_to"][0]["id"], json!("person:B"));

    let roles = acq["P9_consists_of"].as_array().cloned().unwrap_or_default();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0]["P14_carried_out_by"][0]["id"], json!("person:C"));
    assert_eq!(roles[0]["P17_was_motivated_by"], json!([{"id": "person:A"}]));
}

#[test]
fn amount_and_currency_are_order_independent() {
    let forward = expand(json!({"id": "contract:sale8", "saleAmount": ["1500.50"], "saleCurrency": ["currency:lira"]}));
    let backward = expand(json!({"id": "contract:sale8", "saleCurrency": ["currency:lira"], "saleAmount": ["1500.50"]}));

    let price = &forward["P70_documents"][0]["P179_had_sales_price"][0];
    assert_eq!(price["type"], json!("E97_Monetary_Amount"));
    assert_eq!(price["P181_has_amount"], json!(1500.5));
    assert_eq!(price["P180_has_currency"][0]["id"], json!("currency:lira"));
    assert_eq!(forward["P70_documents"], backward["P70_documents"]);
}

#[test]
fn receiving_party_follows_document_kind() {
    let dowry = expand(json!({"id": "doc:1", "type": "Dowry", "receivingParty": ["person:X"]}));
    assert_eq!(dowry["P70_documents"][0]["type"], json!("E8_Acquisition"));
    assert_eq!(dowry["P70_documents"][0]["P22_transferred_title_to"][0]["id"], json!("person:X"));

    let declaration = expand(json!({"id": "doc:1", "type": "Declaration", "receivingParty": ["person:X"]}));
    let docs = declaration["P70_documents"].as_array().cloned().unwrap_or_default();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["type"], json!("E7_Activity"));
    assert_eq!(docs[0]["P11_had_participant"][0]["id"], json!("person:X"));
}

#[test]
fn independent_runs_mint_identical_ids() {
    let a = expand(misc_contract());
    let b = expand(misc_contract());
    assert_eq!(a["P1_is_identified_by"][0]["id"], b["P1_is_identified_by"][0]["id"]);
    assert_eq!(a["P94i_was_created_by"][0]["id"], b["P94i_was_created_by"][0]["id"]);
    assert_eq!(a["P94i_was_created_by"][0]["P4_has_time-span"][0]["id"],
               b["P94i_was_created_by"][0]["P4_has_time-span"][0]["id"]);
}
