//! storage/exists through the agent

use crate::common::*;
use blackboard::prelude::*;

#[test]
fn exists_without_keys() {
    let mut agent = create_agent();
    let names: Vec<String> = (0..100).map(|i| format!("random key {}", i * 7919)).collect();
    for name in &names {
        agent.storage_mut().put(name.clone(), "x");
    }
    let arguments: Vec<Value> = names.iter().map(|n| Value::from(n.as_str())).collect();

    let output = agent.invoke(&ExistsAction::new(), &arguments).unwrap();

    assert_eq!(output.len(), 100);
    assert!(bools(&output).into_iter().all(|b| b));
}

#[test]
fn exists_with_keys() {
    let mut agent = create_agent();
    agent.storage_mut().put("value 9", 5);
    agent.storage_mut().put("value 7", 5);

    let output = agent
        .invoke(
            &ExistsAction::with_keys(["value 9", "value 77", "57"]),
            &keys(&["value 9", "value 7", "value 23", "value 77", "57", "123"]),
        )
        .unwrap();

    assert_eq!(bools(&output), vec![false, true, false, false, false, false]);
}

#[test]
fn exists_with_key_stream() {
    let mut agent = create_agent();
    agent.storage_mut().put("value 33", 5);
    agent.storage_mut().put("value 177", 5);
    agent.storage_mut().put("value 23", 19);

    let protected = ["value 33", "value 88", "23"].iter().map(|k| k.to_string());
    let output = agent
        .invoke(
            &ExistsAction::with_keys(protected),
            &keys(&["value 33", "value 177", "value 23", "value 137"]),
        )
        .unwrap();

    assert_eq!(bools(&output), vec![false, true, true, false]);
}

#[test]
fn exists_does_not_reveal_protected_presence() {
    let mut agent = create_agent();
    agent.storage_mut().put("secret", 1);

    let hidden = agent
        .invoke(&ExistsAction::with_keys(["secret"]), &keys(&["secret"]))
        .unwrap();
    let visible = agent
        .invoke(&ExistsAction::new(), &keys(&["secret"]))
        .unwrap();

    assert_eq!(bools(&hidden), vec![false]);
    assert_eq!(bools(&visible), vec![true]);
    assert!(agent.storage().contains_key("secret"));
}

#[test]
fn exists_requires_one_argument() {
    let mut agent = create_agent();

    let err = agent.invoke(&ExistsAction::new(), &[]).unwrap_err();

    assert!(err.is_arity());
}

#[test]
fn exists_with_predicate() {
    let mut agent = create_agent();
    agent.storage_mut().put("secret 1", 1);
    agent.storage_mut().put("public", 2);

    let output = agent
        .invoke(
            &ExistsAction::with_predicate(|k: &str| k.starts_with("secret")),
            &keys(&["secret 1", "public"]),
        )
        .unwrap();

    assert_eq!(bools(&output), vec![false, true]);
}
