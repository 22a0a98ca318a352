//! Decode configuration loaded from TOML files

use std::io::Write;

use thingdb::wire::ValueMessage;
use thingdb::{Attribute, DateTimeZone, DecodeConfig};

use crate::test_utils::{attribute_message, ScriptedTransaction};

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_utc_config_from_file_drives_decoding() {
    let file = write_config("datetime_zone = \"utc\"\n");
    let config = DecodeConfig::from_file(file.path()).unwrap();
    assert_eq!(config.datetime_zone, DateTimeZone::Utc);

    let msg = attribute_message(&[1], "at", ValueMessage::DateTime(1_234_567_890_123));
    let attr = Attribute::of_with_config(&msg, config).unwrap();
    assert_eq!(
        attr.get_value().as_date_time().unwrap().to_string(),
        "2009-02-13 23:31:30.123"
    );
}

#[test]
fn test_transaction_config_applies_to_owners() {
    let file = write_config("datetime_zone = \"utc\"");
    let tx = ScriptedTransaction::new().with_config(DecodeConfig::from_file(file.path()).unwrap());
    tx.push_pages(vec![vec![attribute_message(
        &[2],
        "since",
        ValueMessage::DateTime(0),
    )]]);

    let remote = thingdb::RemoteAttribute::of(
        &tx,
        &attribute_message(&[1], "tag", ValueMessage::Boolean(true)),
    )
    .unwrap();
    let owner = remote.get_owners(None).unwrap().next().unwrap().unwrap();
    let since = owner.as_attribute().unwrap().get_value().as_date_time().unwrap();
    assert_eq!(since.to_string(), "1970-01-01 00:00:00");
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_config("timezone = \"utc\"");
    let err = DecodeConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, thingdb::ConceptError::Config { .. }));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DecodeConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, thingdb::ConceptError::Config { .. }));
}

#[test]
fn test_empty_file_defaults_to_local() {
    let file = write_config("");
    assert_eq!(
        DecodeConfig::from_file(file.path()).unwrap().datetime_zone,
        DateTimeZone::Local
    );
}
