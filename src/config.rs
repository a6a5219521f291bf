use eyre::{Context, Report};
use serde_derive::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub patreon: PatreonConfig,
    pub sentry_dsn: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PatreonConfig {
    pub secret: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl ServerConfig {
    pub fn to_socket_addrs(&self) -> SocketAddr {
        SocketAddr::new(self.host.into(), self.port)
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Report> {
        let path = path.as_ref();
        let config = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&config)
    }

    pub fn parse(config: &str) -> Result<Self, Report> {
        toml::from_str(config).wrap_err("Failed to parse config")
    }
}
