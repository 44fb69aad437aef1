//! Key-value substrate access
//!
//! Every named collection is one JSON-encoded array stored under a single key
//! in an embedded sled database. Reads materialize the whole collection;
//! writes replace it and flush. An absent key reads as an empty collection,
//! while a present-but-malformed value surfaces as
//! [`ClinicError::CorruptCollection`].

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClinicError, Result};
use crate::models::CurrentUser;
use crate::schema::slots;

/// Handle to the durable key-value store.
///
/// Cloning is cheap and yields a handle to the same underlying database; the
/// store itself is the only piece of state that needs a single owner.
#[derive(Debug, Clone)]
pub struct Store {
    db: sled::Db,
}

impl Store {
    /// Open (or create) the store at the given directory
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)?;
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Read a named collection, treating an absent key as empty
    pub fn read_collection<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        Ok(self.read_collection_opt(name)?.unwrap_or_default())
    }

    /// Read a named collection, distinguishing an entirely absent collection
    /// (`None`) from a stored empty one (`Some(vec![])`)
    pub fn read_collection_opt<T: DeserializeOwned>(&self, name: &str) -> Result<Option<Vec<T>>> {
        match self.db.get(name)? {
            Some(bytes) => {
                let items =
                    serde_json::from_slice(&bytes).map_err(|source| ClinicError::CorruptCollection {
                        collection: name.to_string(),
                        source,
                    })?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    /// Replace a named collection and flush to disk
    pub fn write_collection<T: Serialize>(&self, name: &str, items: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec(items)?;
        self.db.insert(name, bytes)?;
        self.db.flush()?;
        debug!(collection = name, count = items.len(), "collection written");
        Ok(())
    }

    /// Read the current caller identity slot
    pub fn current_user(&self) -> Result<Option<CurrentUser>> {
        match self.db.get(slots::CURRENT_USER)? {
            Some(bytes) => {
                let user =
                    serde_json::from_slice(&bytes).map_err(|source| ClinicError::CorruptCollection {
                        collection: slots::CURRENT_USER.to_string(),
                        source,
                    })?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Write the current caller identity slot
    pub fn set_current_user(&self, user: &CurrentUser) -> Result<()> {
        let bytes = serde_json::to_vec(user)?;
        self.db.insert(slots::CURRENT_USER, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Clear the current caller identity slot
    pub fn clear_current_user(&self) -> Result<()> {
        self.db.remove(slots::CURRENT_USER)?;
        self.db.flush()?;
        Ok(())
    }
}
