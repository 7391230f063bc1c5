//! storage/remove through the agent

use crate::common::*;
use blackboard::prelude::*;

#[test]
fn remove_without_keys() {
    let mut agent = create_agent();
    agent.storage_mut().put("xxx", 123);

    let output = agent.invoke(&RemoveAction::new(), &keys(&["xxx"])).unwrap();

    assert!(agent.storage().is_empty());
    assert_eq!(agent.storage().get("xxx"), None);
    assert_eq!(output, vec![Value::Int(123)]);
}

#[test]
fn remove_with_keys() {
    let mut agent = create_agent();
    agent.storage_mut().put("foo", 123);
    agent.storage_mut().put("bar", 456);

    let output = agent
        .invoke(&RemoveAction::with_keys(["foo"]), &keys(&["foo", "bar"]))
        .unwrap();

    assert_eq!(agent.storage().len(), 1);
    assert_eq!(agent.storage().get("foo"), Some(&Value::Int(123)));
    assert_eq!(output, vec![Value::Int(456)]);
}

#[test]
fn remove_with_key_stream() {
    let mut agent = create_agent();
    agent.storage_mut().put("xx", 189);
    agent.storage_mut().put("yy", 267);

    let output = agent
        .invoke(
            &RemoveAction::with_keys(vec!["xx".to_string()].into_iter()),
            &keys(&["xx", "yy"]),
        )
        .unwrap();

    assert_eq!(agent.storage().len(), 1);
    assert!(agent.storage().contains_key("xx"));
    assert_eq!(output, vec![Value::Int(267)]);
}

#[test]
fn remove_absent_key_is_silent() {
    let mut agent = create_agent();

    let output = agent.invoke(&RemoveAction::new(), &keys(&["ghost"])).unwrap();

    assert!(output.is_empty());
}

#[test]
fn remove_with_predicate() {
    let mut agent = create_numbered_agent(10);

    let output = agent
        .invoke(
            &RemoveAction::with_predicate(|k: &str| k != "value 4"),
            &keys(&["value 3", "value 4", "value 5"]),
        )
        .unwrap();

    assert_eq!(output, vec![Value::Int(4)]);
    assert_eq!(agent.storage().len(), 9);
    assert!(agent.storage().contains_key("value 3"));
}

#[test]
fn remove_requires_one_argument() {
    let mut agent = create_agent();

    let err = agent.invoke(&RemoveAction::new(), &[]).unwrap_err();

    assert!(err.is_arity());
}
