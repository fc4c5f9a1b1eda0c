//! Startup configuration.
//!
//! Both binaries read their settings from the environment at startup:
//! `KVSTORE_PORT` for the store service, plus `KVSTORE_HOST` and `API_PORT`
//! for the gateway. Missing required variables abort startup.

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;

#[cfg(test)]
mod tests;

const DEFAULT_STORE_HOST: &str = "127.0.0.1";

fn port_from_env(name: &str) -> anyhow::Result<u16> {
    let raw = env::var(name).with_context(|| format!("{} is not set", name))?;
    parse_port(name, &raw)
}

fn parse_port(name: &str, raw: &str) -> anyhow::Result<u16> {
    raw.parse::<u16>()
        .with_context(|| format!("{} is not a valid port: {:?}", name, raw))
}

/// Settings for the `kvstored` binary.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub listen_addr: SocketAddr,
}

impl StoreConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = port_from_env("KVSTORE_PORT")?;
        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }
}

/// Settings for the `kvapi` binary.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the store service, e.g. `http://127.0.0.1:5000`.
    pub store_url: String,
    pub listen_addr: SocketAddr,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_host =
            env::var("KVSTORE_HOST").unwrap_or_else(|_| DEFAULT_STORE_HOST.to_string());
        let store_port = port_from_env("KVSTORE_PORT")?;
        let api_port = port_from_env("API_PORT")?;

        Ok(Self {
            store_url: format!("http://{}:{}", store_host, store_port),
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, api_port)),
        })
    }
}
