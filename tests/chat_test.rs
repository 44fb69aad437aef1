//! Integration tests for chat session management

use clinic_core::chat::ChatSessionManager;
use clinic_core::models::MessageType;
use clinic_core::{ClinicError, IdGenerator, Store};
use tempfile::TempDir;

fn manager() -> (TempDir, ChatSessionManager) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = Store::open(dir.path()).expect("Failed to open store");
    (dir, ChatSessionManager::new(store, IdGenerator::new()))
}

#[test]
fn new_session_is_active_and_empty() {
    let (_dir, chat) = manager();

    let session = chat
        .create_session("0550000001")
        .expect("Failed to create session");

    assert!(session.is_active);
    assert!(session.messages.is_empty());
    assert_eq!(session.created_at, session.last_message_at);
    assert_eq!(session.patient_phone, "0550000001");
}

#[test]
fn multiple_sessions_per_phone_are_permitted() {
    let (_dir, chat) = manager();

    let a = chat.create_session("0550000001").expect("create");
    let b = chat.create_session("0550000001").expect("create");
    assert_ne!(a.id, b.id);

    let sessions = chat.list_sessions().expect("Failed to list sessions");
    assert_eq!(sessions.len(), 2);
}

#[test]
fn append_message_advances_session_recency() {
    let (_dir, chat) = manager();

    let session = chat.create_session("0550000001").expect("create");
    let message = chat
        .append_message(&session.id, "How are you feeling?", "dr-ahmad")
        .expect("Failed to append");

    assert_eq!(message.message_type, MessageType::ChatMessage);
    assert_eq!(message.recipient_id, "0550000001");
    assert_eq!(message.sender_id, "dr-ahmad");
    assert!(!message.is_read);

    let sessions = chat.list_sessions().expect("Failed to list sessions");
    let stored = sessions.iter().find(|s| s.id == session.id).expect("session");
    assert_eq!(stored.messages.len(), 1);
    assert_eq!(stored.last_message_at, message.sent_at);
    assert_eq!(stored.messages[0].id, message.id);
    assert!(stored.last_message_at >= stored.created_at);
}

#[test]
fn thread_stays_chronological_across_appends() {
    let (_dir, chat) = manager();

    let session = chat.create_session("0550000001").expect("create");
    for i in 0..3 {
        chat.append_message(&session.id, &format!("message {i}"), "dr-ahmad")
            .expect("Failed to append");
    }

    let sessions = chat.list_sessions().expect("Failed to list sessions");
    let stored = sessions.iter().find(|s| s.id == session.id).expect("session");
    assert_eq!(stored.messages.len(), 3);
    for pair in stored.messages.windows(2) {
        assert!(pair[0].sent_at <= pair[1].sent_at);
    }
    assert_eq!(stored.last_message_at, stored.messages[2].sent_at);
}

#[test]
fn append_to_unknown_session_fails_and_persists_nothing() {
    let (_dir, chat) = manager();

    let session = chat.create_session("0550000001").expect("create");
    let err = chat
        .append_message("no-such-session", "hello", "dr-ahmad")
        .expect_err("Appending to an unknown session must fail");
    assert!(matches!(err, ClinicError::NotFound(_)));

    let sessions = chat.list_sessions().expect("Failed to list sessions");
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].messages.is_empty());
    assert_eq!(sessions[0].last_message_at, session.last_message_at);
}

#[test]
fn nested_message_timestamps_survive_reload() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let sent_at;
    let session_id;
    {
        let store = Store::open(dir.path()).expect("Failed to open store");
        let chat = ChatSessionManager::new(store, IdGenerator::new());
        let session = chat.create_session("0550000001").expect("create");
        session_id = session.id.clone();
        sent_at = chat
            .append_message(&session.id, "hello", "dr-ahmad")
            .expect("append")
            .sent_at;
    }

    // Reopen the store from disk and check the nested timestamp.
    let store = Store::open(dir.path()).expect("Failed to reopen store");
    let chat = ChatSessionManager::new(store, IdGenerator::new());
    let sessions = chat.list_sessions().expect("Failed to list sessions");
    let stored = sessions.iter().find(|s| s.id == session_id).expect("session");
    assert_eq!(stored.messages[0].sent_at, sent_at);
    assert_eq!(stored.last_message_at, sent_at);
}
