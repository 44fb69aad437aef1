//! Clinic Core - Domain Persistence for Clinic Operations
//!
//! A Rust library implementing the persistence core of a small clinic
//! operations system: patients book appointments, staff manage them, and
//! staff exchange messages with patients.
//!
//! # Features
//!
//! - Patient records with find-or-create-by-phone semantics
//! - Appointment booking with deterministic slot assignment
//! - Append-only outbound messaging log with a pluggable notification seam
//! - Per-phone chat sessions with ordered message threads
//! - Editable system content with upsert-by-key and attribution
//!
//! All state lives in named collections inside an embedded key-value store;
//! every mutation is a whole-collection read-modify-write. The core is
//! synchronous and single-threaded by design.

/// Chat session management
pub mod chat;
/// Configuration management
pub mod config;
/// System content storage
pub mod content;
/// Error types
pub mod error;
/// Identifier generation
pub mod ids;
/// Logging setup and utilities
pub mod logging;
/// Outbound messaging log
pub mod messaging;
/// Data models and structures
pub mod models;
/// Notification delivery seam
pub mod notify;
/// Patient repository
pub mod patients;
/// Appointment scheduling
pub mod scheduler;
/// Well-known substrate key names
pub mod schema;
/// Service wiring
pub mod services;
/// Key-value substrate access
pub mod store;
/// Input validation and sanitization
pub mod validation;

// Re-export key components for easier access
pub use error::{ClinicError, Result};
pub use ids::IdGenerator;
pub use models::{
    Appointment, AppointmentFilters, AppointmentStatus, BookingRequest, ChatSession, ContentType,
    CurrentUser, Message, MessageType, Patient, SystemContentEntry, UserRole,
};
pub use notify::NotificationSender;
pub use scheduler::SchedulerOptions;
pub use services::ClinicServices;
pub use store::Store;
