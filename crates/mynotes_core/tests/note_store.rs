use mynotes_core::{NoteId, NoteStore, NoteValidationError};
use proptest::prelude::*;
use std::collections::HashSet;
use uuid::Uuid;

fn texts(store: &NoteStore) -> Vec<&str> {
    store.iter().map(|note| note.text.as_str()).collect()
}

#[test]
fn add_prepends_and_grows_by_one() {
    let mut store = NoteStore::new();
    let first = store.add("first").unwrap();
    let second = store.add("second").unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].id, second.id);
    assert_eq!(store.notes()[1].id, first.id);
}

#[test]
fn invalid_add_leaves_store_unchanged() {
    let mut store = NoteStore::new();
    store.add("keep").unwrap();
    let before = store.clone();

    assert_eq!(store.add(""), Err(NoteValidationError::Empty));
    assert_eq!(store.add(" \n\t "), Err(NoteValidationError::Empty));
    assert!(matches!(
        store.add(&"z".repeat(201)),
        Err(NoteValidationError::TooLong { len: 201, max: 200 })
    ));
    assert_eq!(store, before);
}

#[test]
fn update_unknown_id_leaves_store_unchanged() {
    let mut store = NoteStore::new();
    store.add("one").unwrap();
    store.add("two").unwrap();
    let before = store.clone();

    assert!(!store.update(Uuid::new_v4(), "changed"));
    assert_eq!(store, before);
}

#[test]
fn update_keeps_position_and_id() {
    let mut store = NoteStore::new();
    let a = store.add("a").unwrap();
    store.add("b").unwrap();
    store.add("c").unwrap();

    assert!(store.update(a.id, "  a2  "));
    assert_eq!(texts(&store), vec!["c", "b", "a2"]);
    assert_eq!(store.position(a.id), Some(2));
}

#[test]
fn remove_existing_and_unknown() {
    let mut store = NoteStore::new();
    let a = store.add("a").unwrap();
    let b = store.add("b").unwrap();
    store.add("c").unwrap();

    let before = store.clone();
    assert_eq!(store.remove(Uuid::new_v4()), None);
    assert_eq!(store, before);

    let removed = store.remove(b.id).unwrap();
    assert_eq!(removed.text, "b");
    assert_eq!(store.len(), 2);
    assert!(store.get(b.id).is_none());
    assert_eq!(texts(&store), vec!["c", "a"]);
    assert!(store.get(a.id).is_some());
}

#[test]
fn buy_milk_scenario() {
    let mut store = NoteStore::new();
    assert!(store.is_empty());

    let x = store.add("Buy milk").unwrap();
    assert_eq!(texts(&store), vec!["Buy milk"]);

    let y = store.add("Call mom").unwrap();
    assert_eq!(texts(&store), vec!["Call mom", "Buy milk"]);
    assert_eq!(store.notes()[0].id, y.id);

    assert!(store.update(x.id, "Buy oat milk"));
    assert_eq!(texts(&store), vec!["Call mom", "Buy oat milk"]);
    assert_eq!(store.notes()[0].id, y.id);

    assert!(store.remove(y.id).is_some());
    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].id, x.id);
    assert_eq!(store.notes()[0].text, "Buy oat milk");
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Update(usize, String),
    Remove(usize),
    UpdateMissing(String),
    RemoveMissing,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,12}".prop_map(Op::Add),
        (any::<usize>(), "[a-z]{0,8}").prop_map(|(idx, text)| Op::Update(idx, text)),
        any::<usize>().prop_map(Op::Remove),
        "[a-z]{1,8}".prop_map(Op::UpdateMissing),
        Just(Op::RemoveMissing),
    ]
}

fn pick(store: &NoteStore, seed: usize) -> Option<NoteId> {
    if store.is_empty() {
        None
    } else {
        Some(store.notes()[seed % store.len()].id)
    }
}

proptest! {
    #[test]
    fn ids_stay_unique_and_untouched_order_is_preserved(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let mut store = NoteStore::new();

        for op in ops {
            let before = store.clone();
            match op {
                Op::Add(text) => {
                    let added = store.add(&text);
                    if text.trim().is_empty() {
                        prop_assert!(added.is_err());
                        prop_assert_eq!(&store, &before);
                    } else {
                        let note = added.unwrap();
                        prop_assert_eq!(store.len(), before.len() + 1);
                        prop_assert_eq!(store.notes()[0].id, note.id);
                        prop_assert_eq!(&store.notes()[1..], before.notes());
                    }
                }
                Op::Update(seed, text) => {
                    if let Some(id) = pick(&store, seed) {
                        prop_assert!(store.update(id, &text));
                        let after_ids = store.iter().map(|n| n.id).collect::<Vec<_>>();
                        let before_ids = before.iter().map(|n| n.id).collect::<Vec<_>>();
                        prop_assert_eq!(after_ids, before_ids);
                        for (old, new) in before.iter().zip(store.iter()) {
                            if old.id != id {
                                prop_assert_eq!(old, new);
                            }
                        }
                    }
                }
                Op::Remove(seed) => {
                    if let Some(id) = pick(&store, seed) {
                        prop_assert!(store.remove(id).is_some());
                        prop_assert_eq!(store.len(), before.len() - 1);
                        let expected = before
                            .iter()
                            .filter(|n| n.id != id)
                            .cloned()
                            .collect::<Vec<_>>();
                        prop_assert_eq!(store.notes(), expected.as_slice());
                    }
                }
                Op::UpdateMissing(text) => {
                    prop_assert!(!store.update(Uuid::new_v4(), &text));
                    prop_assert_eq!(&store, &before);
                }
                Op::RemoveMissing => {
                    prop_assert!(store.remove(Uuid::new_v4()).is_none());
                    prop_assert_eq!(&store, &before);
                }
            }

            let ids = store.iter().map(|n| n.id).collect::<HashSet<_>>();
            prop_assert_eq!(ids.len(), store.len());
        }
    }
}
