//! Chat session management
//!
//! Sessions are per-phone-number message threads. Creating a session never
//! deduplicates against existing sessions for the same phone; appending a
//! message advances the session's recency marker and rewrites the whole
//! session collection.

use chrono::Local;
use tracing::info;

use crate::error::{ClinicError, Result};
use crate::ids::IdGenerator;
use crate::models::{ChatSession, Message, MessageType};
use crate::schema::collections;
use crate::store::Store;
use crate::validation::InputValidator;

/// Manager for chat sessions and their message threads
#[derive(Debug, Clone)]
pub struct ChatSessionManager {
    store: Store,
    ids: IdGenerator,
}

impl ChatSessionManager {
    /// Create a manager over the given store
    #[must_use]
    pub fn new(store: Store, ids: IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Open a new session for a phone number
    pub fn create_session(&self, patient_phone: &str) -> Result<ChatSession> {
        InputValidator::validate_phone(patient_phone)?;

        let now = Local::now();
        let session = ChatSession {
            id: self.ids.new_id(),
            patient_phone: patient_phone.to_string(),
            is_active: true,
            created_at: now,
            last_message_at: now,
            messages: Vec::new(),
        };

        let mut sessions: Vec<ChatSession> =
            self.store.read_collection(collections::CHAT_SESSIONS)?;
        sessions.push(session.clone());
        self.store
            .write_collection(collections::CHAT_SESSIONS, &sessions)?;

        info!(session_id = %session.id, "chat session created");
        Ok(session)
    }

    /// All sessions, in creation order
    pub fn list_sessions(&self) -> Result<Vec<ChatSession>> {
        self.store.read_collection(collections::CHAT_SESSIONS)
    }

    /// Append a message to a session's thread.
    ///
    /// Fails with [`ClinicError::NotFound`] when no session matches, in which
    /// case nothing is persisted. On success the session's `last_message_at`
    /// equals the new message's `sent_at`.
    pub fn append_message(&self, session_id: &str, content: &str, sender: &str) -> Result<Message> {
        InputValidator::validate_message_content(content)?;

        let mut sessions: Vec<ChatSession> =
            self.store.read_collection(collections::CHAT_SESSIONS)?;
        let session = sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| ClinicError::NotFound(format!("chat session {session_id}")))?;

        let now = Local::now();
        let message = Message {
            id: self.ids.new_id(),
            sender_id: sender.to_string(),
            recipient_id: session.patient_phone.clone(),
            content: content.to_string(),
            message_type: MessageType::ChatMessage,
            appointment_id: None,
            is_read: false,
            sent_at: now,
        };

        session.messages.push(message.clone());
        session.last_message_at = now;

        self.store
            .write_collection(collections::CHAT_SESSIONS, &sessions)?;
        Ok(message)
    }
}
