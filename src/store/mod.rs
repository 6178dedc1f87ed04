//! User persistence
//!
//! Users own exactly one profile document. Handlers talk to the
//! [`UserRepository`] trait; PostgreSQL backs it in deployments and an
//! in-memory map backs it in tests and local runs without a database.

mod memory;
mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::auth::UserResponse;
use crate::domain::profile::{Profile, ProfileUpdate};

pub use memory::MemoryUserRepository;
pub use postgres::PgUserRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email is already registered")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub profile: Profile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            profile: record.profile,
        }
    }
}

/// A user after a partial profile update, with the completion flag it had
/// before the merge.
#[derive(Debug, Clone)]
pub struct ProfileChange {
    pub user: UserRecord,
    pub was_completed: bool,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user with an empty profile. `email` is expected normalized.
    async fn create_user(&self, email: &str, password_hash: &str)
        -> Result<UserRecord, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError>;

    /// Merge the present fields into the stored profile and re-derive
    /// completion, atomically per user. `None` when the user is gone.
    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<ProfileChange>, StoreError>;

    /// Lightweight connectivity check for `/health`.
    async fn ping(&self) -> bool;
}
