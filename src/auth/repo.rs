use std::sync::RwLock;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{debug, info};

use crate::auth::password::{decoy_hash, hash_password_blocking, verify_password};
use crate::auth::repo_types::User;
use crate::config::SeedAccount;

/// Persistence seam for user records.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact, case-sensitive username match plus password verification.
    /// Among duplicate usernames the lowest id that verifies wins.
    async fn find_by_credentials(&self, username: &str, password: &str)
        -> anyhow::Result<Option<User>>;

    /// Inserts the bootstrap account with id 1 if the store holds no users.
    /// Returns whether a record was written.
    async fn seed(&self, account: &SeedAccount) -> anyhow::Result<bool>;
}

/// Runs one verify per candidate, and one against the decoy hash when there
/// are none, so an unknown username costs the same as a wrong password.
pub(crate) fn first_verified_with<F>(
    candidates: Vec<User>,
    password: &str,
    mut verify: F,
) -> anyhow::Result<Option<User>>
where
    F: FnMut(&str, &str) -> anyhow::Result<bool>,
{
    if candidates.is_empty() {
        verify(password, decoy_hash()?)?;
        return Ok(None);
    }
    for user in candidates {
        if verify(password, &user.password_hash)
            .with_context(|| format!("verify stored hash for user {}", user.id))?
        {
            return Ok(Some(user));
        }
    }
    Ok(None)
}

async fn first_verified(candidates: Vec<User>, password: &str) -> anyhow::Result<Option<User>> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || first_verified_with(candidates, &password, verify_password))
        .await
        .context("join password verification task")?
}

#[derive(Clone)]
pub struct PgCredentialStore {
    db: PgPool,
}

impl PgCredentialStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("connect to database")?;
        Ok(Self { db })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("run migrations")?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Option<User>> {
        let candidates = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            ORDER BY id ASC
            "#,
        )
        .bind(username)
        .fetch_all(&self.db)
        .await
        .context("select users by username")?;
        debug!(candidates = candidates.len(), "credential lookup");
        first_verified(candidates, password).await
    }

    async fn seed(&self, account: &SeedAccount) -> anyhow::Result<bool> {
        let hash = hash_password_blocking(account.password.clone()).await?;
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash)
            SELECT 1, $1, $2
            WHERE NOT EXISTS (SELECT 1 FROM users)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(&account.username)
        .bind(&hash)
        .execute(&self.db)
        .await
        .context("seed bootstrap user")?;

        let inserted = result.rows_affected() == 1;
        if inserted {
            info!(username = %account.username, "bootstrap user seeded");
        }
        Ok(inserted)
    }
}

/// In-process store for tests and local demo runs.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: RwLock<Vec<User>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> anyhow::Result<Option<User>> {
        let candidates: Vec<User> = self
            .users
            .read()
            .map_err(|_| anyhow::anyhow!("credential store lock poisoned"))?
            .iter()
            .filter(|u| u.username == username)
            .cloned()
            .collect();
        first_verified(candidates, password).await
    }

    async fn seed(&self, account: &SeedAccount) -> anyhow::Result<bool> {
        let hash = hash_password_blocking(account.password.clone()).await?;
        let mut users = self
            .users
            .write()
            .map_err(|_| anyhow::anyhow!("credential store lock poisoned"))?;
        if !users.is_empty() {
            return Ok(false);
        }
        users.push(User {
            id: 1,
            username: account.username.clone(),
            password_hash: hash,
        });
        info!(username = %account.username, "bootstrap user seeded");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;

    fn account() -> SeedAccount {
        SeedAccount::default()
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let store = MemoryCredentialStore::new();
        assert!(store.seed(&account()).await.unwrap());
        assert!(!store.seed(&account()).await.unwrap());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn finds_seeded_user() {
        let store = MemoryCredentialStore::new();
        store.seed(&account()).await.unwrap();
        let user = store
            .find_by_credentials("admin", "123456")
            .await
            .unwrap()
            .expect("seeded user");
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn lookup_is_exact_and_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.seed(&account()).await.unwrap();
        for (u, p) in [("Admin", "123456"), ("admin ", "123456"), ("admin", "wrong"), ("", "")] {
            assert!(store.find_by_credentials(u, p).await.unwrap().is_none(), "{u:?}/{p:?}");
        }
    }

    #[tokio::test]
    async fn lowest_id_wins_among_duplicates() {
        let store = MemoryCredentialStore::new();
        {
            let mut users = store.users.write().unwrap();
            for id in [1, 2] {
                users.push(User {
                    id,
                    username: "dup".into(),
                    password_hash: hash_password("same").unwrap(),
                });
            }
        }
        let user = store.find_by_credentials("dup", "same").await.unwrap().unwrap();
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn corrupt_hash_is_an_error_not_a_miss() {
        let store = MemoryCredentialStore::new();
        store.users.write().unwrap().push(User {
            id: 1,
            username: "admin".into(),
            password_hash: "plaintext".into(),
        });
        assert!(store.find_by_credentials("admin", "plaintext").await.is_err());
    }

    /// Runs against `TEST_DATABASE_URL` (a scratch Postgres); skipped when unset.
    #[tokio::test]
    async fn postgres_seed_and_lookup() {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set; skipping postgres store test");
            return;
        };
        let store = PgCredentialStore::connect(&url).await.unwrap();
        store.migrate().await.unwrap();
        store.seed(&account()).await.unwrap();
        assert!(!store.seed(&account()).await.unwrap());
        let user = store.find_by_credentials("admin", "123456").await.unwrap();
        assert_eq!(user.map(|u| u.id), Some(1));
        assert!(store.find_by_credentials("admin", "wrong").await.unwrap().is_none());
        assert!(store.find_by_credentials("ADMIN", "123456").await.unwrap().is_none());
        assert!(store.find_by_credentials("ghost", "123456").await.unwrap().is_none());
    }
}
