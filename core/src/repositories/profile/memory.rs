//! In-memory implementation of ProfileRepository
//!
//! Used by tests and local runs without a database. Honors the same
//! conditional-write contract as the MySQL implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::UserProfile;
use crate::domain::value_objects::CallerIdentity;
use crate::errors::StoreError;

use super::r#trait::ProfileRepository;

/// In-memory profile store
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryProfileRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a profile
    pub async fn insert(&self, profile: UserProfile) {
        self.profiles
            .write()
            .await
            .insert(profile.uid.as_str().to_string(), profile);
    }

    /// Snapshot of a stored profile
    pub async fn get(&self, uid: &str) -> Option<UserProfile> {
        self.profiles.read().await.get(uid).cloned()
    }

    /// Number of successful `mark_phone_verified` writes
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_uid(&self, uid: &CallerIdentity) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().await.get(uid.as_str()).cloned())
    }

    async fn mark_phone_verified(
        &self,
        uid: &CallerIdentity,
        phone: &str,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let mut profiles = self.profiles.write().await;

        let profile = profiles
            .get_mut(uid.as_str())
            .ok_or_else(|| StoreError::NotFound { uid: uid.to_string() })?;

        if profile.version != expected_version {
            return Err(StoreError::Conflict { uid: uid.to_string() });
        }

        profile.mark_phone_verified(phone);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(profile.version)
    }
}
