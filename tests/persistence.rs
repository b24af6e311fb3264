//! Library-level checks that a session and its document agree across
//! process boundaries (simulated by reopening the same file).

use std::fs;

use docket::io::store_io::{self, LoadError};
use docket::model::task::{ClockTime, Meridiem, Priority, Task, TaskFields};
use docket::ops::session::{Mutation, Session};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fields(topic: &str, priority: &str) -> TaskFields {
    TaskFields {
        topic: topic.into(),
        description: format!("{} notes", topic),
        date: "2024-01-15".into(),
        time: ClockTime::new(9, 30, Meridiem::Am).unwrap(),
        priority: priority.into(),
    }
}

fn reopen(path: &std::path::Path) -> Session {
    let (session, err) = Session::initialize(path);
    assert!(err.is_none(), "unexpected load error: {:?}", err);
    session
}

#[test]
fn saved_tasks_load_back_field_for_field() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasks.json");
    let tasks = vec![
        Task {
            topic: "Team Meeting".into(),
            description: "Weekly sync".into(),
            date: "2024-01-15".into(),
            time: "9:30 AM".into(),
            priority: Priority::High,
            completed: false,
        },
        Task {
            topic: "会議の準備".into(),
            description: "Slides, \"quotes\" and a\nnewline".into(),
            date: "2024-02-29".into(),
            time: "12:00 PM".into(),
            priority: Priority::Low,
            completed: true,
        },
    ];
    store_io::save_tasks(&path, &tasks).unwrap();
    assert_eq!(store_io::load_tasks(&path).unwrap(), tasks);
}

#[test]
fn session_changes_survive_reopen() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasks.json");

    let mut session = reopen(&path);
    for (topic, priority) in [("A", "High"), ("B", "medium"), ("C", "LOW")] {
        session
            .apply_mutation(Mutation::Create(fields(topic, priority)))
            .unwrap();
    }
    session
        .apply_mutation(Mutation::Toggle { target: Some(2) })
        .unwrap();
    session
        .apply_mutation(Mutation::Delete { target: Some(0) })
        .unwrap();
    session
        .apply_mutation(Mutation::Update {
            target: Some(1),
            fields: fields("C2", "High"),
        })
        .unwrap();
    let in_memory = session.store().tasks().to_vec();
    drop(session);

    let session = reopen(&path);
    assert_eq!(session.store().tasks(), in_memory.as_slice());
    let summary: Vec<(&str, Priority, bool)> = session
        .store()
        .tasks()
        .iter()
        .map(|t| (t.topic.as_str(), t.priority, t.completed))
        .collect();
    assert_eq!(
        summary,
        vec![("B", Priority::Medium, false), ("C2", Priority::High, true)]
    );
}

#[test]
fn ids_follow_tasks_but_are_not_persisted() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasks.json");
    let mut session = reopen(&path);
    session.apply_mutation(Mutation::Create(fields("A", "High"))).unwrap();
    session.apply_mutation(Mutation::Create(fields("B", "High"))).unwrap();

    let b = session.store().id_at(1).unwrap();
    session
        .apply_mutation(Mutation::Delete { target: Some(0) })
        .unwrap();
    assert_eq!(session.store().position_of(b), Some(0));

    let doc = fs::read_to_string(&path).unwrap();
    assert!(!doc.contains("\"id\""));
}

#[test]
fn document_written_by_hand_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasks.json");
    // No "completed" key: older documents omit it
    fs::write(
        &path,
        r#"[{"topic":"A","description":"B","date":"2024-01-15","time":"9:30 AM","priority":"Low"}]"#,
    )
    .unwrap();
    let session = reopen(&path);
    let task = session.store().get(0).unwrap();
    assert_eq!(task.priority, Priority::Low);
    assert!(!task.completed);
}

#[test]
fn unknown_priority_in_document_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tasks.json");
    fs::write(
        &path,
        r#"[{"topic":"A","description":"B","date":"2024-01-15","time":"9:30 AM","priority":"Urgent","completed":false}]"#,
    )
    .unwrap();
    let (session, err) = Session::initialize(&path);
    assert!(matches!(err, Some(LoadError::Parse { .. })));
    assert!(session.store().is_empty());
    assert!(tmp.path().join("tasks.json.corrupt").exists());
}
