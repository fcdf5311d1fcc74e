//! Cache of authenticated uploader profiles.
//!
//! Identities are owned by the external token issuer; this table only keeps
//! the name/email last seen in a token so project reads can expand an
//! account uploader without calling back to the issuer.

use crate::Result as DbErrorResult;

use sc_core::UserProfile;

use chrono::Utc;
use sqlx::SqlitePool;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert or refresh a profile. Missing name/email never erase known values.
    pub async fn upsert(&self, profile: &UserProfile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, updated_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = COALESCE(excluded.name, users.name),
                    email = COALESCE(excluded.email, users.email),
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
