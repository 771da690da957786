//! SSH key pair management

use super::Ec2Client;
use super::types::KeyMaterial;
use crate::aws::error::ignore_not_found;
use anyhow::{Context, Result};
use tracing::{debug, info};

impl Ec2Client {
    /// Delete a key pair by name.
    ///
    /// Returns Ok(()) if the key pair was deleted or doesn't exist.
    pub async fn delete_key_pair(&self, key_name: &str) -> Result<()> {
        let result = self.client.delete_key_pair().key_name(key_name).send().await;

        match ignore_not_found(result).context("Failed to delete key pair")? {
            Some(_) => info!(key_name = %key_name, "Deleted existing key pair"),
            None => debug!(key_name = %key_name, "Key pair did not exist"),
        }
        Ok(())
    }

    /// Create a key pair and return its private key
    pub async fn create_key_pair(&self, key_name: &str) -> Result<KeyMaterial> {
        let response = self
            .client
            .create_key_pair()
            .key_name(key_name)
            .send()
            .await
            .with_context(|| format!("Failed to create key pair {key_name}"))?;

        let material = response
            .key_material()
            .context("No key material in response")?;

        info!(
            key_name = %key_name,
            fingerprint = response.key_fingerprint().unwrap_or("unknown"),
            "Key pair created"
        );
        Ok(KeyMaterial::new(material))
    }
}
