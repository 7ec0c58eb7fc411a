//! Full-stack tests over the stock adapters: JSON file store, in-memory
//! roster, scripted prompts.
//!
//! Everything runs against a tempdir; no network, no live user.

use roster_core::{ItemId, ListItem, RosterEntry, RosterError};
use roster_engine::{build_manager, ListManager, ListModifier};
use roster_provider::{
    AllowAll, JsonFileStore, MemoryRoster, NameRules, QuotaPolicy, RecordingSink, RemoteStore,
    ScriptedPrompts,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

type FileManager = ListManager<JsonFileStore<RosterEntry>, ListModifier<MemoryRoster>>;

fn entry(id: &str, name: &str) -> RosterEntry {
    RosterEntry::new(ItemId::from(id), name)
}

async fn kit_over(
    path: &Path,
    seeded: Vec<RosterEntry>,
    answers: &[&str],
) -> (
    FileManager,
    Arc<JsonFileStore<RosterEntry>>,
    Arc<RecordingSink>,
) {
    let store = Arc::new(JsonFileStore::new(path));
    store.upload(&seeded, None).await.expect("seed store");

    let sink = Arc::new(RecordingSink::new());
    let manager = build_manager(
        store.clone(),
        Arc::new(MemoryRoster::from_entries(seeded)),
        Arc::new(AllowAll),
        Arc::new(ScriptedPrompts::with_answers(answers.iter().copied())),
        Arc::new(NameRules::new()),
        sink.clone(),
    );
    (manager, store, sink)
}

#[tokio::test]
async fn add_lands_in_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let (manager, store, sink) = kit_over(&path, vec![entry("1", "Alice")], &["Bob"]).await;

    manager.add_new().await;

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], entry("1", "Alice"));
    assert_eq!(stored[1].name(), "Bob");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn add_into_an_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let (manager, store, sink) = kit_over(&path, vec![], &["X"]).await;

    manager.add_new().await;

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name(), "X");
    assert!(!stored[0].id().as_str().is_empty());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn rename_keeps_identity_and_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let seeded = vec![entry("1", "Alice"), entry("2", "Bob"), entry("3", "Cara")];
    let (manager, store, sink) = kit_over(&path, seeded, &["Robert"]).await;

    manager.edit(&entry("2", "Bob")).await;

    let stored = store.load().await.unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[1].id(), &ItemId::from("2"));
    assert_eq!(stored[1].name(), "Robert");
    assert_eq!(stored[0].name(), "Alice");
    assert_eq!(stored[2].name(), "Cara");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn delete_shrinks_the_store_and_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let seeded = vec![entry("1", "Alice"), entry("2", "Bob"), entry("3", "Cara")];
    let (manager, store, sink) = kit_over(&path, seeded, &[]).await;

    manager.delete(&entry("2", "Bob")).await;

    let stored = store.load().await.unwrap();
    assert_eq!(stored, vec![entry("1", "Alice"), entry("3", "Cara")]);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn reorder_is_persisted_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let seeded = vec![entry("1", "Alice"), entry("2", "Bob"), entry("3", "Cara")];
    let (manager, store, sink) = kit_over(&path, seeded, &[]).await;

    let reordered = vec![entry("3", "Cara"), entry("1", "Alice"), entry("2", "Bob")];
    manager.upload_reordered_list(&reordered).await;

    assert_eq!(store.load().await.unwrap(), reordered);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn quota_blocks_the_add_before_any_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let seeded = vec![entry("1", "Alice")];

    let store = Arc::new(JsonFileStore::<RosterEntry>::new(&path));
    store.upload(&seeded, None).await.expect("seed store");

    let policy = Arc::new(QuotaPolicy::new(1));
    policy.set_count(seeded.len());

    let sink = Arc::new(RecordingSink::new());
    // The script is empty: if the pipeline reached the prompt it would hang
    // forever, so completing at all proves the gate fired first.
    let manager = build_manager(
        store.clone(),
        Arc::new(MemoryRoster::from_entries(seeded.clone())),
        policy,
        Arc::new(ScriptedPrompts::new()),
        Arc::new(NameRules::new()),
        sink.clone(),
    );

    manager.add_new().await;

    assert_eq!(store.load().await.unwrap(), seeded);
    let reported = sink.reported();
    assert_eq!(reported.len(), 1);
    assert!(matches!(reported[0], RosterError::PolicyDenied { .. }));
}

#[tokio::test]
async fn abandoned_prompt_leaves_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let (manager, store, sink) = kit_over(&path, vec![entry("1", "Alice")], &[]).await;

    // No scripted answer: the name prompt never resolves. Dropping the
    // stalled future (as timeout does) abandons the whole operation.
    let outcome = tokio::time::timeout(Duration::from_millis(30), manager.add_new()).await;
    assert!(outcome.is_err(), "add should stall on the unanswered prompt");

    assert_eq!(store.load().await.unwrap(), vec![entry("1", "Alice")]);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn unwritable_store_reports_a_remote_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("roster.json");

    let sink = Arc::new(RecordingSink::new());
    let manager = build_manager(
        Arc::new(JsonFileStore::<RosterEntry>::new(&path)),
        Arc::new(MemoryRoster::new()),
        Arc::new(AllowAll),
        Arc::new(ScriptedPrompts::with_answers(["Bob"])),
        Arc::new(NameRules::new()),
        sink.clone(),
    );

    manager.add_new().await;

    let reported = sink.reported();
    assert_eq!(reported.len(), 1);
    assert!(matches!(reported[0], RosterError::Remote(_)));
}
