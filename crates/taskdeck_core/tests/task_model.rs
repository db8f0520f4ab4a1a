use taskdeck_core::{validate_due_date, Priority, Task, TaskValidationError};
use uuid::Uuid;

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("write report", Priority::B, "2024-06-01").unwrap();

    assert!(!task.id.is_nil());
    assert_eq!(task.text, "write report");
    assert_eq!(task.priority, Priority::B);
    assert_eq!(task.due_date, "2024-06-01");
    assert!(!task.completed);
    assert!(task.created_at > 0);
}

#[test]
fn task_new_trims_text_and_due_date() {
    let task = Task::new("  buy milk  ", Priority::A, " 2024-06-01 ").unwrap();
    assert_eq!(task.text, "buy milk");
    assert_eq!(task.due_date, "2024-06-01");
}

#[test]
fn task_new_rejects_blank_text() {
    let err = Task::new("   ", Priority::A, "2024-06-01").unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyText);
}

#[test]
fn task_new_rejects_missing_due_date() {
    let err = Task::new("buy milk", Priority::A, "").unwrap_err();
    assert_eq!(err, TaskValidationError::MissingDueDate);
}

#[test]
fn task_new_rejects_misshapen_due_date() {
    for bad in ["tomorrow", "2024-6-1", "2024-13-01", "2024-06-32", "01-06-2024"] {
        let err = Task::new("buy milk", Priority::A, bad).unwrap_err();
        assert_eq!(err, TaskValidationError::InvalidDueDate(bad.to_string()));
    }
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Task::with_id(Uuid::nil(), "buy milk", Priority::A, "2024-06-01").unwrap_err();
    assert_eq!(err, TaskValidationError::NilId);
}

#[test]
fn validate_due_date_accepts_calendar_shape() {
    validate_due_date("2024-01-01").unwrap();
    validate_due_date("2024-12-31").unwrap();
}

#[test]
fn priority_parses_all_tiers_case_insensitively() {
    assert_eq!("A".parse::<Priority>().unwrap(), Priority::A);
    assert_eq!("b".parse::<Priority>().unwrap(), Priority::B);
    assert_eq!(" C ".parse::<Priority>().unwrap(), Priority::C);
    assert_eq!("d".parse::<Priority>().unwrap(), Priority::D);
}

#[test]
fn priority_rejects_unknown_tier() {
    let err = "E".parse::<Priority>().unwrap_err();
    assert_eq!(err, TaskValidationError::InvalidPriority("E".to_string()));
}

#[test]
fn priority_order_is_a_through_d() {
    assert!(Priority::A < Priority::B);
    assert!(Priority::B < Priority::C);
    assert!(Priority::C < Priority::D);
    assert_eq!(Priority::ALL, [Priority::A, Priority::B, Priority::C, Priority::D]);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut task = Task::with_id(task_id, "pay rent", Priority::A, "2024-06-01").unwrap();
    task.completed = true;
    task.created_at = 1_700_000_000_000;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], task_id.to_string());
    assert_eq!(json["text"], "pay rent");
    assert_eq!(json["priority"], "A");
    assert_eq!(json["due_date"], "2024-06-01");
    assert_eq!(json["completed"], true);
    assert_eq!(json["created_at"], 1_700_000_000_000_i64);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
