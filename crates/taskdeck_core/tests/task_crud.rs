use taskdeck_core::{MemoryBlobStore, Priority, StoreError, TaskStore, TaskValidationError};
use uuid::Uuid;

fn open_store() -> TaskStore<MemoryBlobStore> {
    TaskStore::open(MemoryBlobStore::new()).unwrap()
}

#[test]
fn add_task_appends_exactly_one_record() {
    let mut store = open_store();
    let before = store.load_all().len();

    let task = store.add_task("Buy milk", Priority::B, "2024-06-01").unwrap();

    let all = store.load_all();
    assert_eq!(all.len(), before + 1);
    assert_eq!(all[all.len() - 1], task);
    assert_eq!(task.text, "Buy milk");
    assert_eq!(task.priority, Priority::B);
    assert_eq!(task.due_date, "2024-06-01");
    assert!(!task.completed);
}

#[test]
fn add_task_rejects_blank_text_and_leaves_collection_unchanged() {
    let mut store = open_store();
    store.add_task("keep me", Priority::A, "2024-06-01").unwrap();

    let err = store.add_task("   ", Priority::A, "2024-06-01").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::EmptyText)
    ));
    assert_eq!(store.load_all().len(), 1);
}

#[test]
fn add_task_rejects_bad_due_date() {
    let mut store = open_store();
    let err = store.add_task("buy milk", Priority::A, "soon").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::InvalidDueDate(_))
    ));
    assert!(store.load_all().is_empty());
}

#[test]
fn update_task_edits_fields_in_place() {
    let mut store = open_store();
    let task = store.add_task("draft", Priority::C, "2024-06-01").unwrap();

    let updated = store
        .update_task(task.id, "final", Priority::A, "2024-06-02")
        .unwrap();

    assert_eq!(updated.id, task.id);
    assert_eq!(updated.text, "final");
    assert_eq!(updated.priority, Priority::A);
    assert_eq!(updated.due_date, "2024-06-02");
    assert_eq!(updated.completed, task.completed);
    assert_eq!(updated.created_at, task.created_at);

    let all = store.load_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], updated);
}

#[test]
fn update_with_invalid_input_leaves_stored_task_untouched() {
    let mut store = open_store();
    let task = store.add_task("draft", Priority::C, "2024-06-01").unwrap();

    let err = store
        .update_task(task.id, "", Priority::A, "2024-06-02")
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(TaskValidationError::EmptyText)
    ));
    assert_eq!(store.load_all()[0], task);
}

#[test]
fn update_not_found_returns_not_found() {
    let mut store = open_store();
    let missing = Uuid::new_v4();
    let err = store
        .update_task(missing, "text", Priority::A, "2024-06-01")
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn double_toggle_restores_original_completion() {
    let mut store = open_store();
    let task = store.add_task("flip me", Priority::B, "2024-06-01").unwrap();

    let once = store.toggle_completion(task.id).unwrap();
    assert!(once.completed);

    let twice = store.toggle_completion(task.id).unwrap();
    assert_eq!(twice.completed, task.completed);
}

#[test]
fn toggle_not_found_returns_not_found() {
    let mut store = open_store();
    let missing = Uuid::new_v4();
    let err = store.toggle_completion(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[test]
fn delete_task_removes_record() {
    let mut store = open_store();
    let keep = store.add_task("keep", Priority::A, "2024-06-01").unwrap();
    let drop = store.add_task("drop", Priority::B, "2024-06-02").unwrap();

    store.delete_task(drop.id).unwrap();

    let all = store.load_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

#[test]
fn delete_not_found_leaves_collection_unchanged() {
    let mut store = open_store();
    let task = store.add_task("keep", Priority::A, "2024-06-01").unwrap();

    let missing = Uuid::new_v4();
    let err = store.delete_task(missing).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
    assert_eq!(store.load_all(), std::slice::from_ref(&task));
}

#[test]
fn load_all_keeps_insertion_order() {
    let mut store = open_store();
    let first = store.add_task("first", Priority::D, "2024-06-03").unwrap();
    let second = store.add_task("second", Priority::A, "2024-06-01").unwrap();
    let third = store.add_task("third", Priority::B, "2024-06-02").unwrap();

    let ids: Vec<_> = store.load_all().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}
