//! Argon2 credential hashing.
//!
//! Hashing and verification are CPU-bound; the `*_blocking` wrappers move
//! them onto tokio's blocking pool so request workers stay free.

use std::sync::OnceLock;

use anyhow::Context;
use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

/// Hashed once per process and verified against whenever a username has no
/// record, so a miss costs one Argon2 verify like a wrong password does.
static DECOY_HASH: OnceLock<String> = OnceLock::new();
const DECOY_PASSWORD: &str = "loginbox-decoy-credential";

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow::anyhow!("argon2 hash: {e}"))
}

/// `Ok(false)` on mismatch. Errors mean the stored hash itself is unusable.
pub fn verify_password(plain: &str, stored: &str) -> anyhow::Result<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| anyhow::anyhow!("argon2 parse stored hash: {e}"))?;
    match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow::anyhow!("argon2 verify: {e}")),
    }
}

pub fn decoy_hash() -> anyhow::Result<&'static str> {
    if let Some(hash) = DECOY_HASH.get() {
        return Ok(hash);
    }
    let hash = hash_password(DECOY_PASSWORD)?;
    Ok(DECOY_HASH.get_or_init(|| hash))
}

pub async fn hash_password_blocking(plain: String) -> anyhow::Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&plain))
        .await
        .context("join password hashing task")?
}
