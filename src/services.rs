//! Service wiring
//!
//! Construction point for all service objects. The original system used
//! process-wide singletons; here the store handle and identifier generator
//! are created once and passed explicitly into each service.

use std::path::Path;
use std::sync::Arc;

use crate::chat::ChatSessionManager;
use crate::content::SystemContentStore;
use crate::error::Result;
use crate::ids::IdGenerator;
use crate::messaging::MessageLog;
use crate::notify::{LogNotifier, NotificationSender};
use crate::patients::PatientRepository;
use crate::scheduler::{AppointmentScheduler, SchedulerOptions};
use crate::store::Store;

/// The full set of domain services over one store.
///
/// Construct once at process start; individual services are cheap to clone
/// and share the same underlying database handle.
#[derive(Clone)]
pub struct ClinicServices {
    /// Patient repository
    pub patients: PatientRepository,
    /// Appointment scheduler
    pub scheduler: AppointmentScheduler,
    /// Outbound messaging log
    pub messages: MessageLog,
    /// Chat session manager
    pub chat: ChatSessionManager,
    /// System content store
    pub content: SystemContentStore,
    /// The underlying store handle (attribution slot access)
    pub store: Store,
}

impl ClinicServices {
    /// Wire all services over a store opened at `path`, with the default
    /// log-only notification sender
    pub fn open(path: &Path, options: SchedulerOptions) -> Result<Self> {
        let store = Store::open(path)?;
        Ok(Self::with_notifier(store, Arc::new(LogNotifier), options))
    }

    /// Wire all services over an existing store and notification collaborator
    #[must_use]
    pub fn with_notifier(
        store: Store,
        notifier: Arc<dyn NotificationSender>,
        options: SchedulerOptions,
    ) -> Self {
        let ids = IdGenerator::new();
        let patients = PatientRepository::new(store.clone(), ids.clone());
        let messages = MessageLog::new(store.clone(), ids.clone(), notifier);
        let scheduler = AppointmentScheduler::new(
            store.clone(),
            ids.clone(),
            patients.clone(),
            messages.clone(),
            options,
        );
        let chat = ChatSessionManager::new(store.clone(), ids.clone());
        let content = SystemContentStore::new(store.clone(), ids);

        Self {
            patients,
            scheduler,
            messages,
            chat,
            content,
            store,
        }
    }
}
