//! Data models for the clinic persistence core
//!
//! This module contains all domain entities stored in the substrate, the
//! request/filter types accepted by the services, and the caller identity
//! used for attribution. All timestamps use the local clock; the stored
//! representation round-trips through serde with full offset information.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A patient record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Opaque unique identifier
    pub id: String,
    /// Patient's full name
    pub name: String,
    /// Patient's age in years
    pub age: u32,
    /// Phone number, used as the lookup key for repeat bookings
    pub phone: String,
    /// Free-text description of the patient's condition
    pub condition: String,
    /// Timestamp when the record was created
    pub created_at: DateTime<Local>,
    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Local>,
}

/// Lifecycle status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    /// Booked, awaiting staff confirmation
    Pending,
    /// Confirmed by staff
    Confirmed,
    /// Cancelled before the visit
    Cancelled,
    /// Visit took place
    Completed,
    /// Patient did not attend
    NoShow,
}

/// An appointment record
///
/// Carries a denormalized copy of the patient record taken at booking time.
/// The copy is a read convenience and is never re-synced with the patient
/// repository afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    /// Opaque unique identifier
    pub id: String,
    /// Reference to the patient record
    pub patient_id: String,
    /// Snapshot of the patient at booking time
    pub patient: Patient,
    /// Date of the appointment
    pub appointment_date: DateTime<Local>,
    /// Assigned time slot, "HH:MM"
    pub appointment_time: String,
    /// Current lifecycle status
    pub status: AppointmentStatus,
    /// Free-text staff notes
    pub notes: String,
    /// Timestamp when the record was created
    pub created_at: DateTime<Local>,
    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Local>,
}

/// Category of an outbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    /// Confirmation sent right after a booking
    AppointmentConfirmation,
    /// Reminder ahead of an appointment
    AppointmentReminder,
    /// Health guidance content
    HealthGuidance,
    /// Anything else sent by staff
    GeneralMessage,
    /// Message inside a chat session thread
    ChatMessage,
}

/// An outbound message
///
/// Messages are append-only: once recorded they are never mutated or
/// deleted, and `is_read` is never flipped by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Opaque unique identifier
    pub id: String,
    /// "clinic" for log messages, a staff identifier for chat messages
    pub sender_id: String,
    /// Recipient phone number
    pub recipient_id: String,
    /// Message text content
    pub content: String,
    /// Category of the message
    pub message_type: MessageType,
    /// Appointment this message refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_id: Option<String>,
    /// Read flag, always false when created
    pub is_read: bool,
    /// Timestamp when the message was sent
    pub sent_at: DateTime<Local>,
}

/// A chat session: an ordered, append-only message thread keyed by phone
///
/// Multiple concurrent sessions per phone number are permitted; sessions are
/// never deduplicated or deactivated by this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    /// Opaque unique identifier
    pub id: String,
    /// Phone number the session belongs to
    pub patient_phone: String,
    /// Always true on creation, never flipped
    pub is_active: bool,
    /// Timestamp when the session was created
    pub created_at: DateTime<Local>,
    /// Timestamp of the most recent appended message; equals `created_at`
    /// while the thread is empty
    pub last_message_at: DateTime<Local>,
    /// Chronological message thread
    pub messages: Vec<Message>,
}

/// Rendering type of a system content entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    /// Plain text
    Text,
    /// HTML fragment
    Html,
    /// Configuration value
    Configuration,
    /// Message template
    Template,
}

/// An editable system content entry, upserted by logical key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemContentEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Logical unique key
    pub content_key: String,
    /// Current value
    pub content_value: String,
    /// Rendering type, TEXT for new entries
    pub content_type: ContentType,
    /// Identity of the last editor
    pub updated_by: String,
    /// Timestamp of the last edit
    pub updated_at: DateTime<Local>,
}

/// Role of an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Clinic administrator
    Admin,
    /// Technical support / editorial panel
    TechSupport,
    /// Patient
    Patient,
}

/// Currently authenticated caller identity
///
/// Owned by the authentication collaborator; this core only reads it to
/// populate attribution fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Opaque user identifier
    pub id: String,
    /// Role of the user
    pub role: UserRole,
}

/// Data for booking an appointment (and creating the patient on first sight)
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Patient's full name
    pub name: String,
    /// Patient's age in years
    pub age: u32,
    /// Patient's phone number
    pub phone: String,
    /// Free-text description of the patient's condition
    pub condition: String,
}

/// Optional filters for appointment listing
///
/// All filters are conjunctive; an empty filter set returns everything.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilters {
    /// Keep appointments on this calendar day, ignoring time of day
    pub date: Option<NaiveDate>,
    /// Keep appointments with exactly this status
    pub status: Option<AppointmentStatus>,
    /// Keep appointments whose patient snapshot name contains this string,
    /// case-insensitively
    pub patient_name: Option<String>,
}
