//! Outbound messaging log
//!
//! Append-only record of every message the clinic sends. Persistence comes
//! first; the notification collaborator is invoked afterwards as a
//! fire-and-forget side effect, so a delivery failure never loses the record.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::models::{Message, MessageType};
use crate::notify::NotificationSender;
use crate::schema::collections;
use crate::store::Store;
use crate::validation::InputValidator;

/// Append-only log of outbound messages
#[derive(Clone)]
pub struct MessageLog {
    store: Store,
    ids: IdGenerator,
    notifier: Arc<dyn NotificationSender>,
}

impl MessageLog {
    /// Sender identifier recorded on every log message
    pub const CLINIC_SENDER: &'static str = "clinic";

    /// Create a log over the given store and notification collaborator
    #[must_use]
    pub fn new(store: Store, ids: IdGenerator, notifier: Arc<dyn NotificationSender>) -> Self {
        Self { store, ids, notifier }
    }

    /// Record and dispatch an outbound message
    pub fn send(
        &self,
        recipient_phone: &str,
        content: &str,
        message_type: MessageType,
        appointment_id: Option<String>,
    ) -> Result<Message> {
        InputValidator::validate_message_content(content)?;

        let message = Message {
            id: self.ids.new_id(),
            sender_id: Self::CLINIC_SENDER.to_string(),
            recipient_id: recipient_phone.to_string(),
            content: content.to_string(),
            message_type,
            appointment_id,
            is_read: false,
            sent_at: Local::now(),
        };

        let mut messages: Vec<Message> = self.store.read_collection(collections::MESSAGES)?;
        messages.push(message.clone());
        self.store.write_collection(collections::MESSAGES, &messages)?;

        // Delivery is fire-and-forget: the record above stands either way.
        if self.notifier.notify(&message.recipient_id, &message.content) {
            info!(message_id = %message.id, recipient = %message.recipient_id, "message dispatched");
        } else {
            warn!(message_id = %message.id, recipient = %message.recipient_id, "notification delivery failed");
        }

        Ok(message)
    }

    /// All messages, most recent first
    pub fn list(&self) -> Result<Vec<Message>> {
        let mut messages: Vec<Message> = self.store.read_collection(collections::MESSAGES)?;
        messages.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        Ok(messages)
    }
}
