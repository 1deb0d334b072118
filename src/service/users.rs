use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::config::UserConfig;

/// A registered account.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    account: String,
    password: String,
    email: String,
}

impl User {
    pub fn new(account: impl Into<String>, password: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn check_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("account", &self.account)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<UserConfig> for User {
    fn from(config: UserConfig) -> Self {
        Self::new(config.account, config.password, config.email)
    }
}

/// Account lookup and persistence.
pub trait UserRepository: Send + Sync {
    fn find_by_account(&self, account: &str) -> Option<User>;

    /// Stores a user, replacing any existing user with the same account.
    fn save(&self, user: User);
}

/// Accounts kept in process memory, keyed by account name.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let repo = Self::new();
        for user in users {
            repo.save(user);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.users.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_account(&self, account: &str) -> Option<User> {
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(account)
            .cloned()
    }

    fn save(&self, user: User) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user.account.clone(), user);
    }
}
