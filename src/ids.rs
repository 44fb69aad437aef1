//! Identifier generation
//!
//! Identifiers combine a monotonically non-decreasing millisecond timestamp
//! with a random base-36 suffix. Collisions are ruled out with overwhelming
//! probability over the lifetime of a store; nothing here is cryptographic.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generator of collision-resistant string identifiers.
///
/// Cloning yields a handle sharing the same monotonic state, so clones never
/// emit a time component that goes backwards relative to each other.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_ms: Arc<AtomicI64>,
}

impl IdGenerator {
    /// Create a new generator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a fresh identifier
    #[must_use]
    pub fn new_id(&self) -> String {
        let now = Utc::now().timestamp_millis();
        // fetch_max returns the previous value; the component we emit is the
        // larger of the two so a clock step backwards never repeats downwards.
        let prev = self.last_ms.fetch_max(now, Ordering::Relaxed);
        let ms = prev.max(now);

        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();

        format!("{ms}{suffix}")
    }
}
