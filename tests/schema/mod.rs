//! Validates serialized reports against the service's JSON schema.

use error_beacon::{MessageBuilder, StackFrame, MAX_CAUSE_DEPTH};
use jsonschema::Validator;
use serde_json::json;

use crate::support::Exception;

fn validator() -> Validator {
    let schema = serde_json::from_str(include_str!("report.schema.json")).unwrap();
    jsonschema::validator_for(&schema).unwrap()
}

fn assert_valid(builder: &MessageBuilder) {
    let document = serde_json::from_str(&builder.serialize().unwrap()).unwrap();
    let validator = validator();
    let errors: Vec<String> = validator
        .iter_errors(&document)
        .map(|e| e.to_string())
        .collect();
    assert!(errors.is_empty(), "schema violations: {errors:?}");
}

#[test]
fn single_error_without_cause_validates() {
    let mut builder = MessageBuilder::new();
    builder.build(&Exception::new("Test")).unwrap();
    assert_valid(&builder);
}

#[test]
fn nested_error_with_frames_validates() {
    let frames = vec![StackFrame::new("service.rs", 10, "Service", "call")];
    let mut builder = MessageBuilder::at_epoch(0).unwrap();
    builder
        .build(
            &Exception::new("outer")
                .with_frames(frames)
                .caused_by(Exception::new("inner")),
        )
        .unwrap();
    assert_valid(&builder);
}

#[test]
fn truncated_deep_chain_still_validates() {
    let mut builder = MessageBuilder::new();
    builder.build(&Exception::chain(MAX_CAUSE_DEPTH * 2)).unwrap();
    assert!(builder.truncated());
    assert_valid(&builder);
}

#[test]
fn report_with_opaque_slots_validates() {
    let mut builder = MessageBuilder::at_epoch(0).unwrap();
    builder.set_machine_name(json!("web-01"));
    builder.set_client(json!({ "name": "error-beacon", "version": "0.1.0" }));
    builder.set_environment(json!({ "osVersion": "Linux 6.8" }));
    builder.set_tags(json!(["prod"]));
    builder.set_user_custom_data(json!({ "request_id": "r-42" }));
    builder.build(&Exception::new("Test")).unwrap();
    assert_valid(&builder);
}
