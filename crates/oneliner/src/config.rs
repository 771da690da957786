//! Configuration types for the provisioner

use crate::error::ConfigError;
use crate::wait::WaitConfig;
use oneliner_common::{ResourceKind, subnet_cidr};
use oneliner_common::defaults::{
    self, DEFAULT_BOOTSTRAP_SCRIPT, DEFAULT_IMAGE_ID, DEFAULT_INSTANCE_TYPE, DEFAULT_IP_ECHO_URL,
    DEFAULT_KEY_NAME, DEFAULT_NAME_PREFIX, DEFAULT_VPC_CIDR, INVENTORY_FILENAME,
    REQUIRED_ENV_VARS,
};
use std::path::PathBuf;
use std::time::Duration;

/// Check that every required environment variable is set to a non-blank value.
pub fn check_required_env_vars() -> Result<(), ConfigError> {
    check_required_env_with(|name| std::env::var(name).ok())
}

/// Same as [`check_required_env_vars`] with an injectable lookup.
///
/// Variables are checked in [`REQUIRED_ENV_VARS`] order and the first missing
/// one is reported. Whitespace-only values count as missing.
pub fn check_required_env_with<F>(lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for name in REQUIRED_ENV_VARS {
        let present = lookup(name).is_some_and(|v| !v.trim().is_empty());
        if !present {
            return Err(ConfigError::MissingEnvVar(name.to_string()));
        }
    }
    Ok(())
}

/// Where the instance image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A fixed image id
    Fixed(String),
    /// The newest available image from `owner` whose name matches `name_filter`
    NewestMatching { owner: String, name_filter: String },
}

/// Network layout
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// CIDR block for the VPC
    pub vpc_cidr: String,
    /// Prefix for `Name` tags and the security group name
    pub name_prefix: String,
}

/// Instance launch parameters
#[derive(Debug, Clone)]
pub struct InstanceConfig {
    pub image: ImageSource,
    /// EC2 instance type (e.g., "t2.medium")
    pub instance_type: String,
    /// Key pair name; the private key is written to `<key_name>.pem`
    pub key_name: String,
    /// Shell script passed to the instance as user-data
    pub bootstrap_script: PathBuf,
}

/// Timeouts for the poll-until-ready loops
#[derive(Debug, Clone)]
pub struct WaitSettings {
    /// VPC and subnet availability
    pub network_timeout: Duration,
    /// Instance status checks
    pub instance_timeout: Duration,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            network_timeout: Duration::from_secs(600),
            instance_timeout: Duration::from_secs(1200),
        }
    }
}

impl WaitSettings {
    /// Backoff for VPC and subnet availability (1-15s)
    pub fn network(&self) -> WaitConfig {
        WaitConfig {
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(15),
            timeout: self.network_timeout,
        }
    }

    /// Backoff for instance status checks (5-15s)
    pub fn instance(&self) -> WaitConfig {
        WaitConfig {
            initial_delay: Duration::from_secs(5),
            max_delay: Duration::from_secs(15),
            timeout: self.instance_timeout,
        }
    }
}

/// Configuration for a provisioning run
#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    /// AWS region
    pub region: String,
    pub network: NetworkConfig,
    pub instance: InstanceConfig,
    /// Endpoint echoing the caller's public IP
    pub ip_echo_url: String,
    /// Directory the key file and inventory are written to
    pub output_dir: PathBuf,
    pub wait: WaitSettings,
}

impl ProvisionConfig {
    /// Configuration with every default for the given region
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            network: NetworkConfig {
                vpc_cidr: DEFAULT_VPC_CIDR.to_string(),
                name_prefix: DEFAULT_NAME_PREFIX.to_string(),
            },
            instance: InstanceConfig {
                image: ImageSource::Fixed(DEFAULT_IMAGE_ID.to_string()),
                instance_type: DEFAULT_INSTANCE_TYPE.to_string(),
                key_name: DEFAULT_KEY_NAME.to_string(),
                bootstrap_script: PathBuf::from(DEFAULT_BOOTSTRAP_SCRIPT),
            },
            ip_echo_url: DEFAULT_IP_ECHO_URL.to_string(),
            output_dir: PathBuf::from("."),
            wait: WaitSettings::default(),
        }
    }

    /// Reject settings that would only fail later, mid-pipeline
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::EmptyRegion);
        }
        if self.network.name_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyNamePrefix);
        }
        subnet_cidr(&self.network.vpc_cidr, 1).map_err(ConfigError::InvalidVpcCidr)?;
        if self.instance.key_name.trim().is_empty() {
            return Err(ConfigError::EmptyKeyName);
        }
        match &self.instance.image {
            ImageSource::Fixed(id) if id.trim().is_empty() => Err(ConfigError::MissingImage),
            ImageSource::NewestMatching { owner, name_filter }
                if owner.trim().is_empty() || name_filter.trim().is_empty() =>
            {
                Err(ConfigError::MissingImage)
            }
            _ => Ok(()),
        }
    }

    /// Private-key file name (without directory)
    pub fn key_file_name(&self) -> String {
        defaults::key_file_name(&self.instance.key_name)
    }

    /// Full path of the private-key file
    pub fn key_file_path(&self) -> PathBuf {
        self.output_dir.join(self.key_file_name())
    }

    /// Full path of the inventory file
    pub fn inventory_path(&self) -> PathBuf {
        self.output_dir.join(INVENTORY_FILENAME)
    }

    /// Security group name
    pub fn security_group_name(&self) -> String {
        ResourceKind::SecurityGroup.tag_name(&self.network.name_prefix, None)
    }
}
