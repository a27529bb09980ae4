use anyhow::{anyhow, Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub struct AppConfig {
    pub store: StoreConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup instead of the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |key: &str| lookup(key).ok_or_else(|| anyhow!("{key} is not set"));

        let store = match lookup("STORE_BACKEND").as_deref() {
            None | Some("postgres") => StoreConfig::Postgres(DatabaseConfig {
                host: require("DATABASE_HOST")?,
                port: require("DATABASE_PORT")?
                    .parse()
                    .context("DATABASE_PORT must be a port number")?,
                username: require("DATABASE_USERNAME")?,
                password: require("DATABASE_PASSWORD")?,
                database: require("DATABASE_NAME")?,
            }),
            Some("memory") => StoreConfig::InMemory,
            Some(other) => return Err(anyhow!("unknown STORE_BACKEND: {other}")),
        };

        let host = match lookup("HOST") {
            Some(h) => h.parse().context("HOST must be an IP address")?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match lookup("PORT") {
            Some(p) => p.parse().context("PORT must be a port number")?,
            None => 8080,
        };

        Ok(Self {
            store,
            server: ServerConfig { host, port },
        })
    }
}

pub enum StoreConfig {
    Postgres(DatabaseConfig),
    InMemory,
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
