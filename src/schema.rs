//! Well-known substrate key names
//!
//! Each named collection is stored as a single JSON-encoded array under one
//! key in the key-value store; one extra single-record slot holds the
//! currently authenticated caller identity used for attribution.

/// Named collections, one serialized array per key
pub mod collections {
    /// Patient records
    pub const PATIENTS: &str = "patients";
    /// Appointment records
    pub const APPOINTMENTS: &str = "appointments";
    /// Outbound message log
    pub const MESSAGES: &str = "messages";
    /// Chat sessions with their message threads
    pub const CHAT_SESSIONS: &str = "chat_sessions";
    /// Editable system content entries
    pub const SYSTEM_CONTENT: &str = "system_content";
}

/// Single-record slots
pub mod slots {
    /// Currently authenticated caller identity (id + role), written by the
    /// authentication collaborator and read for attribution only
    pub const CURRENT_USER: &str = "current_user";
}
