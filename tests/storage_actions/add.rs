//! storage/add through the agent

use crate::common::*;
use blackboard::prelude::*;

#[test]
fn add_without_keys() {
    let mut agent = create_agent();

    let output = agent
        .invoke(
            &AddAction::new(),
            &["testnumber".into(), 123.into(), "teststring".into(), "foobar".into()],
        )
        .unwrap();

    assert!(output.is_empty());
    assert_eq!(agent.storage().len(), 2);
    assert_eq!(agent.storage().get("testnumber"), Some(&Value::Int(123)));
    assert_eq!(agent.storage().get("teststring"), Some(&Value::from("foobar")));
}

#[test]
fn add_with_keys() {
    let mut agent = create_agent();

    agent
        .invoke(&AddAction::with_keys(["bar"]), &["bar".into(), 123.into()])
        .unwrap();

    assert_eq!(agent.storage().len(), 0);
    assert_eq!(agent.storage().get("bar"), None);
}

#[test]
fn add_with_key_stream() {
    let mut agent = create_agent();
    let protected = std::iter::once("abc".to_string());

    agent
        .invoke(&AddAction::with_keys(protected), &["abc".into(), 123.into()])
        .unwrap();

    assert!(agent.storage().is_empty());
}

#[test]
fn add_protected_key_leaves_existing_value() {
    let mut agent = create_agent();
    agent.storage_mut().put("config", "original");

    agent
        .invoke(
            &AddAction::with_keys(["config"]),
            &["config".into(), "overwritten".into(), "note".into(), Value::Null],
        )
        .unwrap();

    assert_eq!(agent.storage().get("config"), Some(&Value::from("original")));
    assert_eq!(agent.storage().get("note"), Some(&Value::Null));
}

#[test]
fn add_stores_opaque_values_unchanged() {
    let mut agent = create_agent();
    let nested = Value::Array(vec![Value::Bytes(vec![0, 1]), Value::Float(2.5)]);

    agent
        .invoke(&AddAction::new(), &["payload".into(), nested.clone()])
        .unwrap();

    assert_eq!(agent.storage().get("payload"), Some(&nested));
}

#[test]
fn add_odd_arguments_strict_by_default() {
    let mut agent = create_agent();

    let err = agent
        .invoke(&AddAction::new(), &["a".into(), 1.into(), "b".into()])
        .unwrap_err();

    assert!(err.is_malformed());
    assert!(agent.storage().is_empty());
}

#[test]
fn add_odd_arguments_lenient_agent_policy() {
    let mut agent = Agent::builder().pair_policy(PairPolicy::Lenient).build();
    let action = agent.add_action(Resolver::none());

    agent
        .invoke(&action, &["a".into(), 1.into(), "b".into()])
        .unwrap();

    assert_eq!(key_set(agent.storage()), set(&["a"]));
}

#[test]
fn add_single_argument_passes_arity_but_is_malformed() {
    let mut agent = create_agent();

    let err = agent.invoke(&AddAction::new(), &["lonely".into()]).unwrap_err();

    assert!(err.is_malformed());
    assert!(!err.is_arity());
}

#[test]
fn add_non_string_key_is_invalid() {
    let mut agent = create_agent();

    let err = agent
        .invoke(&AddAction::new(), &[Value::Int(1), Value::Int(2)])
        .unwrap_err();

    assert!(matches!(err, Error::InvalidKey(_)));
}

#[test]
fn add_lenient_rejects_bad_key_without_partial_write() {
    let mut agent = Agent::builder().pair_policy(PairPolicy::Lenient).build();
    let action = agent.add_action(Resolver::none());

    let err = agent
        .invoke(&action, &["a".into(), 1.into(), 5.into(), 2.into(), "tail".into()])
        .unwrap_err();

    assert!(matches!(err, Error::InvalidKey(_)));
    assert!(agent.storage().is_empty());
}

#[test]
fn add_error_message_names_action_once() {
    let mut agent = create_agent();

    let message = agent
        .invoke(&AddAction::new(), &["lonely".into()])
        .unwrap_err()
        .to_string();

    assert_eq!(message.matches("malformed arguments").count(), 1);
    assert_eq!(message.matches("storage/add").count(), 1);
}
