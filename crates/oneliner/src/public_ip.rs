//! Public IP discovery
//!
//! The security group only admits the machine running the provisioner, so
//! its public address is looked up from an IP echo service.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::debug;

/// Source of the caller's public IPv4 address
#[allow(async_fn_in_trait)]
#[cfg_attr(test, mockall::automock)]
pub trait PublicIpSource {
    async fn public_ip(&self) -> Result<String>;
}

/// Looks up the public IP with a plain GET against an echo endpoint
pub struct HttpIpEcho {
    client: reqwest::Client,
    url: String,
}

impl HttpIpEcho {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl PublicIpSource for HttpIpEcho {
    async fn public_ip(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch public IP from {}", self.url))?
            .error_for_status()
            .with_context(|| format!("IP echo service {} returned an error", self.url))?;

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        let ip = parse_echo_body(&body)?;
        debug!(public_ip = %ip, "Detected public IP");
        Ok(ip)
    }
}

/// Extract an IPv4 address from an echo service response body
pub fn parse_echo_body(body: &str) -> Result<String> {
    let ip = body.trim();
    if ip.parse::<std::net::Ipv4Addr>().is_err() {
        anyhow::bail!("Invalid IPv4 address received: {:?}", ip);
    }
    Ok(ip.to_string())
}
