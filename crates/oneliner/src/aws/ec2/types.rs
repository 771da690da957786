//! EC2 types and configuration

/// Configuration for launching the demo instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSpec {
    /// Machine image id (e.g., "ami-13c15e69")
    pub image_id: String,
    /// EC2 instance type (e.g., "t2.medium")
    pub instance_type: String,
    /// Key pair installed for the default user
    pub key_name: String,
    /// Subnet the primary network interface is placed in
    pub subnet_id: String,
    /// Security group attached to the primary network interface
    pub security_group_id: String,
    /// User data script, already base64 encoded
    pub user_data_b64: String,
}

/// Private key returned by CreateKeyPair.
///
/// Debug output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial(String);

impl KeyMaterial {
    pub fn new(pem: impl Into<String>) -> Self {
        Self(pem.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyMaterial(<redacted>)")
    }
}
