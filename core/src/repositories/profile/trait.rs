//! Profile repository trait defining the interface to the profile store.
//!
//! The store owns the profile record; this trait only exposes the read and
//! the single write the verification flow needs.

use async_trait::async_trait;

use crate::domain::entities::UserProfile;
use crate::domain::value_objects::CallerIdentity;
use crate::errors::StoreError;

/// Repository trait for user profile persistence
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile keyed by the caller identity
    ///
    /// # Returns
    /// * `Ok(Some(UserProfile))` - Profile found
    /// * `Ok(None)` - No profile stored for this identity
    /// * `Err(StoreError)` - Store unreachable or returned an error
    async fn find_by_uid(&self, uid: &CallerIdentity) -> Result<Option<UserProfile>, StoreError>;

    /// Record a provider-approved phone on an existing profile
    ///
    /// Partial update: only `phone`, `is_phone_verified`, the version and the
    /// update timestamp change; every other field of the record is preserved.
    /// The write applies only if the stored version still equals
    /// `expected_version`.
    ///
    /// # Returns
    /// * `Ok(version)` - The new version after the write
    /// * `Err(StoreError::Conflict)` - Another writer got there first
    /// * `Err(StoreError::NotFound)` - No profile exists for this identity
    /// * `Err(StoreError::Backend)` - Any other store failure
    async fn mark_phone_verified(
        &self,
        uid: &CallerIdentity,
        phone: &str,
        expected_version: u64,
    ) -> Result<u64, StoreError>;
}
