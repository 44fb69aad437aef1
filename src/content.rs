//! System content storage
//!
//! A key-to-value content table backing the editorial panel. Listing seeds a
//! fixed default set exactly once, when the collection is entirely absent;
//! upsert mutates in place or appends, so one logical key never maps to two
//! entries.

use chrono::Local;
use tracing::info;

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::models::{ContentType, SystemContentEntry};
use crate::schema::collections;
use crate::store::Store;
use crate::validation::InputValidator;

/// Attribution recorded on seeded default entries
const SYSTEM_EDITOR: &str = "system";

/// Default entries seeded into an entirely absent collection:
/// (key, value) pairs, all TEXT type.
const DEFAULT_CONTENT: &[(&str, &str)] = &[
    ("clinic_name", "عيادة الدكتور مصطفى اليوسف"),
    (
        "welcome_message",
        "مرحباً بكم في عيادة الدكتور مصطفى اليوسف. نحن هنا لخدمتكم.",
    ),
    ("clinic_hours", "ساعات العمل: من 9 صباحاً إلى 6 مساءً"),
];

/// Store for editable system content
#[derive(Debug, Clone)]
pub struct SystemContentStore {
    store: Store,
    ids: IdGenerator,
}

impl SystemContentStore {
    /// Create a content store over the given store
    #[must_use]
    pub fn new(store: Store, ids: IdGenerator) -> Self {
        Self { store, ids }
    }

    /// All content entries, seeding the defaults on first read.
    ///
    /// Seeding happens only when the collection is entirely absent; a stored
    /// empty or partial collection is returned as-is, never merged.
    pub fn list(&self) -> Result<Vec<SystemContentEntry>> {
        match self
            .store
            .read_collection_opt::<SystemContentEntry>(collections::SYSTEM_CONTENT)?
        {
            Some(entries) => Ok(entries),
            None => {
                let now = Local::now();
                let defaults: Vec<SystemContentEntry> = DEFAULT_CONTENT
                    .iter()
                    .map(|(key, value)| SystemContentEntry {
                        id: self.ids.new_id(),
                        content_key: (*key).to_string(),
                        content_value: (*value).to_string(),
                        content_type: ContentType::Text,
                        updated_by: SYSTEM_EDITOR.to_string(),
                        updated_at: now,
                    })
                    .collect();
                self.store
                    .write_collection(collections::SYSTEM_CONTENT, &defaults)?;
                info!(count = defaults.len(), "system content seeded");
                Ok(defaults)
            }
        }
    }

    /// Look up a single entry by its logical key
    pub fn get_by_key(&self, key: &str) -> Result<Option<SystemContentEntry>> {
        Ok(self.list()?.into_iter().find(|e| e.content_key == key))
    }

    /// Update the entry with the given key, or create it (TEXT type) when
    /// absent. Returns the affected entry.
    pub fn upsert(
        &self,
        content_key: &str,
        content_value: &str,
        updated_by: &str,
    ) -> Result<SystemContentEntry> {
        InputValidator::validate_content_key(content_key)?;

        let mut entries = self.list()?;
        let now = Local::now();

        let affected = match entries.iter_mut().find(|e| e.content_key == content_key) {
            Some(entry) => {
                entry.content_value = content_value.to_string();
                entry.updated_by = updated_by.to_string();
                entry.updated_at = now;
                entry.clone()
            }
            None => {
                let entry = SystemContentEntry {
                    id: self.ids.new_id(),
                    content_key: content_key.to_string(),
                    content_value: content_value.to_string(),
                    content_type: ContentType::Text,
                    updated_by: updated_by.to_string(),
                    updated_at: now,
                };
                entries.push(entry.clone());
                entry
            }
        };

        self.store
            .write_collection(collections::SYSTEM_CONTENT, &entries)?;
        info!(key = content_key, editor = updated_by, "system content updated");
        Ok(affected)
    }
}
