use std::time::Duration;

/// Which backend the Credential Store runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
}

impl StoreKind {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "memory" | "mem" => Ok(Self::Memory),
            other => anyhow::bail!("unknown STORE value: {other}"),
        }
    }
}

/// Bootstrap account inserted by the seed routine when the store is empty.
#[derive(Debug, Clone)]
pub struct SeedAccount {
    pub username: String,
    pub password: String,
}

impl Default for SeedAccount {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "123456".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreKind,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub seed: SeedAccount,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store = match std::env::var("STORE") {
            Ok(v) => StoreKind::parse(&v)?,
            Err(_) => StoreKind::Postgres,
        };
        let database_url = std::env::var("DATABASE_URL").ok();
        if store == StoreKind::Postgres && database_url.is_none() {
            anyhow::bail!("DATABASE_URL must be set when STORE=postgres");
        }

        let defaults = SeedAccount::default();
        let seed = SeedAccount {
            username: std::env::var("SEED_USERNAME").unwrap_or(defaults.username),
            password: std::env::var("SEED_PASSWORD").unwrap_or(defaults.password),
        };

        Ok(Self {
            store,
            database_url,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5102),
            seed,
        })
    }

    pub fn memory() -> Self {
        Self {
            store: StoreKind::Memory,
            database_url: None,
            host: "127.0.0.1".into(),
            port: 0,
            seed: SeedAccount::default(),
        }
    }
}

/// Settings for the login client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5102".into(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("API_URL").unwrap_or(defaults.api_url),
            timeout: std::env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
