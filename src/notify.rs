//! Notification delivery seam
//!
//! The core decides *that* a notification must go out and *what* it says;
//! delivery (SMS gateway, UI toast) belongs to the host. Failure to deliver
//! is observed and logged by the caller but never reverses persistence.

use tracing::info;

/// Outbound delivery collaborator.
///
/// Returns `true` when the notification was handed off successfully.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSender: Send + Sync {
    /// Deliver `content` to `recipient_id` (a phone number)
    fn notify(&self, recipient_id: &str, content: &str) -> bool;
}

/// Default sender that records the outbound notification in the log stream.
///
/// Stands in for a real SMS gateway; useful in development and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl NotificationSender for LogNotifier {
    fn notify(&self, recipient_id: &str, content: &str) -> bool {
        info!(recipient = recipient_id, content, "SMS sent");
        true
    }
}
