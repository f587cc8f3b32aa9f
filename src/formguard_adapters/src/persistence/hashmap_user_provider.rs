use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use formguard_core::{StoredUser, UserProvider, UserProviderError, UserRecord, Username};

#[derive(Default, Clone)]
pub struct HashMapUserProvider {
    users: Arc<RwLock<HashMap<Username, StoredUser>>>,
}

impl HashMapUserProvider {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn add_user(&self, user: StoredUser) -> Result<(), UserProviderError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserProviderError::UserAlreadyExists);
        }
        users.insert(user.username().clone(), user);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl UserProvider for HashMapUserProvider {
    type User = StoredUser;

    #[tracing::instrument(name = "HashMapUserProvider::load_user_by_username", skip(self))]
    async fn load_user_by_username(
        &self,
        username: &Username,
    ) -> Result<StoredUser, UserProviderError> {
        let users = self.users.read().await;
        users
            .get(username)
            .cloned()
            .ok_or(UserProviderError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, faker::internet::en::Username as FakeUsername};
    use secrecy::Secret;

    fn user(name: &str) -> StoredUser {
        StoredUser::new(
            Username::from(name),
            Secret::new("hash".to_string()),
            vec!["ROLE_USER".to_string()],
        )
    }

    #[tokio::test]
    async fn added_user_can_be_loaded() {
        let provider = HashMapUserProvider::new();
        let name: String = FakeUsername().fake();
        provider.add_user(user(&name)).await.unwrap();

        let loaded = provider
            .load_user_by_username(&Username::from(name.as_str()))
            .await
            .unwrap();

        assert_eq!(loaded.username().as_str(), name);
        assert_eq!(loaded.roles(), ["ROLE_USER".to_string()]);
    }

    #[tokio::test]
    async fn unknown_user_is_reported() {
        let provider = HashMapUserProvider::new();
        provider.add_user(user("alice")).await.unwrap();

        let result = provider.load_user_by_username(&Username::from("bob")).await;

        assert_eq!(result.unwrap_err(), UserProviderError::UserNotFound);
    }

    #[tokio::test]
    async fn duplicate_user_is_rejected() {
        let provider = HashMapUserProvider::new();
        provider.add_user(user("alice")).await.unwrap();

        let result = provider.add_user(user("alice")).await;

        assert_eq!(result, Err(UserProviderError::UserAlreadyExists));
        assert_eq!(provider.len().await, 1);
    }
}
