//! Owner queries through a remote attribute

use thingdb::wire::{RequestBody, ResponsePart, StreamState, TypeEncoding, ValueMessage};
use thingdb::{
    Attribute, ConceptError, DecodeConfig, Iid, RemoteAttribute, Thing, ThingType, ValueKind,
};

use crate::test_utils::{
    attribute_message, init_tracing, people, relation_message, ScriptedTransaction,
};

fn email() -> Attribute {
    Attribute::of_with_config(
        &attribute_message(&[0xe0], "email", ValueMessage::String("a@b.c".into())),
        DecodeConfig::utc(),
    )
    .unwrap()
}

fn iid_bytes(things: &[Thing]) -> Vec<Vec<u8>> {
    things.iter().map(|t| t.iid().as_bytes().to_vec()).collect()
}

#[test]
fn test_owners_in_page_then_entry_order() {
    init_tracing();
    let tx = ScriptedTransaction::new();
    tx.push_pages(vec![people(&[0xa, 0xb]), people(&[0xc])]);
    let owners: Vec<Thing> = email()
        .as_remote(&tx)
        .get_owners(None)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(iid_bytes(&owners), vec![vec![0xa], vec![0xb], vec![0xc]]);
}

#[test]
fn test_stopping_early_fetches_no_further_pages() {
    let tx = ScriptedTransaction::new();
    tx.push_pages(vec![people(&[1, 2]), people(&[3])]);
    let remote = email().as_remote(&tx);
    let first: Vec<Thing> = remote
        .get_owners(None)
        .unwrap()
        .take(2)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(tx.parts_taken(), 1);
}

#[test]
fn test_no_owners() {
    let tx = ScriptedTransaction::new();
    tx.push_pages(vec![]);
    let remote = email().as_remote(&tx);
    assert_eq!(remote.get_owners(None).unwrap().count(), 0);
}

#[test]
fn test_mixed_owner_kinds() {
    let tx = ScriptedTransaction::new().with_config(DecodeConfig::utc());
    tx.push_pages(vec![vec![
        people(&[1]).remove(0),
        relation_message(&[2], "employment"),
        attribute_message(&[3], "nickname", ValueMessage::String("al".into())),
    ]]);
    let owners: Vec<Thing> = email()
        .as_remote(&tx)
        .get_owners(None)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(owners[0].as_entity().is_some());
    assert!(owners[1].as_relation().is_some());
    let nickname = owners[2].as_attribute().unwrap();
    assert_eq!(nickname.get_value().as_str(), Some("al"));
    assert_eq!(
        owners[2].thing_type(),
        ThingType::attribute("nickname", ValueKind::String)
    );
}

#[test]
fn test_filter_passed_through_unchanged() {
    let tx = ScriptedTransaction::new();
    tx.push_pages(vec![]);
    tx.push_pages(vec![]);
    let remote = email().as_remote(&tx);

    remote
        .get_owners(Some(&ThingType::relation("employment")))
        .unwrap()
        .for_each(drop);
    remote.get_owners(None).unwrap().for_each(drop);

    let requests = tx.requests();
    assert_eq!(requests.len(), 2);
    match &requests[0].body {
        RequestBody::AttributeGetOwners(req) => {
            assert_eq!(req.iid, vec![0xe0]);
            let filter = req.owner_type.as_ref().unwrap();
            assert_eq!(filter.label, "employment");
            assert_eq!(filter.encoding, TypeEncoding::RelationType);
        }
        other => panic!("Expected AttributeGetOwners, got {:?}", other),
    }
    match &requests[1].body {
        RequestBody::AttributeGetOwners(req) => assert!(req.owner_type.is_none()),
        other => panic!("Expected AttributeGetOwners, got {:?}", other),
    }
}

#[test]
fn test_request_serializes_to_json() {
    let tx = ScriptedTransaction::new();
    tx.push_pages(vec![]);
    let remote = email().as_remote(&tx);
    remote
        .get_owners(Some(&ThingType::entity("person")))
        .unwrap()
        .for_each(drop);

    let json = serde_json::to_value(&tx.requests()[0]).unwrap();
    let req = &json["body"]["attribute_get_owners"];
    assert_eq!(req["iid"], serde_json::json!([0xe0]));
    assert_eq!(req["owner_type"]["label"], "person");
    assert_eq!(req["owner_type"]["encoding"], "entity_type");
}

#[test]
fn test_pages_from_json_fixture() {
    let fixture = r#"[
        {"attribute_get_owners": {"things": [
            {"iid": [1], "type": {"label": "person", "encoding": "entity_type"}},
            {"iid": [2], "type": {"label": "person", "encoding": "entity_type"}, "inferred": true}
        ]}},
        {"stream": "continue"},
        {"attribute_get_owners": {"things": [
            {"iid": [3], "type": {"label": "age", "encoding": "attribute_type", "value_type": "long"},
             "value": {"long": 41}}
        ]}},
        {"stream": "done"}
    ]"#;
    let parts: Vec<ResponsePart> = serde_json::from_str(fixture).unwrap();
    let tx = ScriptedTransaction::new();
    tx.push_stream(parts);

    let owners: Vec<Thing> = email()
        .as_remote(&tx)
        .get_owners(None)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(owners.len(), 3);
    assert!(!owners[0].is_inferred());
    assert!(owners[1].is_inferred());
    assert_eq!(
        owners[2].as_attribute().unwrap().get_value().as_long(),
        Some(41)
    );

    let requests = tx.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].body, RequestBody::StreamContinue);
    assert_eq!(requests[1].request_id, requests[0].request_id);
}

#[test]
fn test_independent_streams_interleave() {
    let tx = ScriptedTransaction::new();
    tx.push_pages(vec![people(&[1]), people(&[2])]);
    tx.push_pages(vec![people(&[10, 11])]);

    let first = email().as_remote(&tx);
    let second = RemoteAttribute::of(
        &tx,
        &attribute_message(&[0xe1], "email", ValueMessage::String("x@y.z".into())),
    )
    .unwrap();

    let mut a = first.get_owners(None).unwrap();
    let mut b = second.get_owners(None).unwrap();

    assert_eq!(a.next().unwrap().unwrap().iid(), &Iid::from_bytes(vec![1]));
    assert_eq!(b.next().unwrap().unwrap().iid(), &Iid::from_bytes(vec![10]));
    assert_eq!(a.next().unwrap().unwrap().iid(), &Iid::from_bytes(vec![2]));
    assert_eq!(b.next().unwrap().unwrap().iid(), &Iid::from_bytes(vec![11]));
    assert!(a.next().is_none());
    assert!(b.next().is_none());
}

#[test]
fn test_transport_failure_after_partial_results() {
    let tx = ScriptedTransaction::new();
    tx.push_stream_results(vec![
        Ok(ResponsePart::AttributeGetOwners { things: people(&[1, 2]) }),
        Err(ConceptError::transaction("stream aborted")),
    ]);
    let remote = email().as_remote(&tx);
    let results: Vec<_> = remote.get_owners(None).unwrap().collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok() && results[1].is_ok());
    assert!(results[2].as_ref().unwrap_err().is_transaction_error());
}

#[test]
fn test_malformed_owner_ends_stream() {
    let tx = ScriptedTransaction::new();
    let mut bad = people(&[2]).remove(0);
    bad.iid.clear();
    tx.push_pages(vec![vec![people(&[1]).remove(0), bad], people(&[3])]);
    let remote = email().as_remote(&tx);
    let mut owners = remote.get_owners(None).unwrap();
    assert!(owners.next().unwrap().is_ok());
    assert!(owners.next().unwrap().unwrap_err().is_malformed_response());
    assert!(owners.next().is_none());
    assert!(owners.next().is_none());
}

#[test]
fn test_closed_transaction_rejects_query() {
    let tx = ScriptedTransaction::new();
    let remote = email().as_remote(&tx);
    tx.close();
    assert_eq!(remote.get_owners(None).unwrap_err(), ConceptError::TransactionClosed);
    // the snapshot stays readable
    assert_eq!(remote.get_value().as_str(), Some("a@b.c"));
}

#[test]
fn test_missing_done_part_surfaces_transport_error() {
    let tx = ScriptedTransaction::new();
    tx.push_stream(vec![ResponsePart::Stream(StreamState::Continue)]);
    let remote = email().as_remote(&tx);
    let results: Vec<_> = remote.get_owners(None).unwrap().collect();
    assert_eq!(results.len(), 1);
    assert!(results[0].as_ref().unwrap_err().is_transaction_error());
}
