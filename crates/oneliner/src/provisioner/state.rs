//! Ids collected while the pipeline runs

use anyhow::{Context, Result};

/// A subnet created in one availability zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetRecord {
    pub id: String,
    pub zone: String,
    pub cidr: String,
}

/// Everything created so far.
///
/// Steps take the state by value and hand back an updated copy, so a field
/// is `Some` exactly when the step that produces it has finished.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvisionedState {
    pub vpc_id: Option<String>,
    pub dhcp_options_id: Option<String>,
    /// In availability zone enumeration order
    pub subnets: Vec<SubnetRecord>,
    pub internet_gateway_id: Option<String>,
    pub route_table_id: Option<String>,
    pub security_group_id: Option<String>,
    pub key_name: Option<String>,
    pub instance_id: Option<String>,
    pub public_ip: Option<String>,
}

impl ProvisionedState {
    pub fn vpc_id(&self) -> Result<&str> {
        self.vpc_id.as_deref().context("VPC has not been created")
    }

    /// The subnet the route table and instance are placed in
    pub fn first_subnet(&self) -> Result<&SubnetRecord> {
        self.subnets.first().context("No subnet has been created")
    }

    pub fn internet_gateway_id(&self) -> Result<&str> {
        self.internet_gateway_id
            .as_deref()
            .context("Internet gateway has not been created")
    }

    pub fn security_group_id(&self) -> Result<&str> {
        self.security_group_id
            .as_deref()
            .context("Security group has not been created")
    }

    pub fn key_name(&self) -> Result<&str> {
        self.key_name
            .as_deref()
            .context("Key pair has not been created")
    }

    pub fn instance_id(&self) -> Result<&str> {
        self.instance_id
            .as_deref()
            .context("Instance has not been launched")
    }

    /// Collapse into the final result once every step has run
    pub fn into_outcome(self) -> Result<ProvisionOutcome> {
        Ok(ProvisionOutcome {
            vpc_id: self.vpc_id.context("VPC has not been created")?,
            instance_id: self.instance_id.context("Instance has not been launched")?,
            public_ip: self.public_ip.context("Instance public IP is unknown")?,
        })
    }
}

/// What a successful run hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionOutcome {
    pub vpc_id: String,
    pub instance_id: String,
    pub public_ip: String,
}
