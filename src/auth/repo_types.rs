use sqlx::FromRow;

/// User record in the credential store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,                      // unique, stable
    pub username: String,
    pub password_hash: String,        // Argon2 PHC string
}
