use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::{ProfileChange, StoreError, UserRecord, UserRepository};
use crate::domain::profile::{Profile, ProfileUpdate};

/// Process-local user store; contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, UserRecord>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    /// Overwrite a stored profile as-is, completion flag included. Returns
    /// false when the user does not exist.
    pub fn put_profile(&self, id: Uuid, profile: Profile) -> bool {
        match self.users.write().get_mut(&id) {
            Some(user) => {
                user.profile = profile;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write();
        if users.values().any(|user| user.email == email) {
            return Err(StoreError::DuplicateEmail);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            profile: Profile::default(),
            created_at: now,
            updated_at: now,
        };
        users.insert(record.id, record.clone());

        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        Ok(self.users.read().get(&id).cloned())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<Option<ProfileChange>, StoreError> {
        let mut users = self.users.write();
        let Some(user) = users.get_mut(&id) else {
            return Ok(None);
        };

        let was_completed = user.profile.profile_completed;
        update.apply_to(&mut user.profile);
        user.updated_at = Utc::now();

        Ok(Some(ProfileChange {
            user: user.clone(),
            was_completed,
        }))
    }

    async fn ping(&self) -> bool {
        true
    }
}
