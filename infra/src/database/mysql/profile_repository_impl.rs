//! MySQL implementation of the ProfileRepository trait.
//!
//! The `user_profiles` table may carry columns owned by other parts of the
//! system. Every statement here names its columns explicitly so a write
//! touches only the verification fields.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use pv_core::{CallerIdentity, ProfileRepository, StoreError, UserProfile};

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<UserProfile, StoreError> {
        let uid: String = row.try_get("uid").map_err(backend)?;
        let version: i64 = row.try_get("version").map_err(backend)?;

        Ok(UserProfile {
            uid: CallerIdentity::new(uid.clone())
                .ok_or_else(|| StoreError::Backend(format!("blank uid in row: {:?}", uid)))?,
            phone: row.try_get("phone").map_err(backend)?,
            is_phone_verified: row.try_get("is_phone_verified").map_err(backend)?,
            version: u64::try_from(version)
                .map_err(|_| StoreError::Backend(format!("negative version {}", version)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(backend)?,
        })
    }

    async fn exists(&self, uid: &CallerIdentity) -> Result<bool, StoreError> {
        let row = sqlx::query("SELECT 1 FROM user_profiles WHERE uid = ?")
            .bind(uid.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        Ok(row.is_some())
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn find_by_uid(&self, uid: &CallerIdentity) -> Result<Option<UserProfile>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT uid, phone, is_phone_verified, version, updated_at
            FROM user_profiles
            WHERE uid = ?
            "#,
        )
        .bind(uid.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn mark_phone_verified(
        &self,
        uid: &CallerIdentity,
        phone: &str,
        expected_version: u64,
    ) -> Result<u64, StoreError> {
        let expected = i64::try_from(expected_version)
            .map_err(|_| StoreError::Backend(format!("version out of range: {}", expected_version)))?;

        let result = sqlx::query(
            r#"
            UPDATE user_profiles
            SET phone = ?, is_phone_verified = TRUE, version = version + 1, updated_at = NOW()
            WHERE uid = ? AND version = ?
            "#,
        )
        .bind(phone)
        .bind(uid.as_str())
        .bind(expected)
        .execute(&self.pool)
        .await
        .map_err(backend)?;

        if result.rows_affected() == 1 {
            return Ok(expected_version + 1);
        }

        if self.exists(uid).await? {
            Err(StoreError::Conflict { uid: uid.to_string() })
        } else {
            Err(StoreError::NotFound { uid: uid.to_string() })
        }
    }
}
