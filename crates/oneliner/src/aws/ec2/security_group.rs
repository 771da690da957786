//! Security group management

use super::Ec2Client;
use anyhow::{Context, Result};
use aws_sdk_ec2::types::{IpPermission, IpRange};
use tracing::info;

impl Ec2Client {
    /// Create a security group in a VPC and return its id
    pub async fn create_security_group(
        &self,
        name: &str,
        description: &str,
        vpc_id: &str,
    ) -> Result<String> {
        info!(name = %name, vpc_id = %vpc_id, "Creating security group");

        let response = self
            .client
            .create_security_group()
            .group_name(name)
            .description(description)
            .vpc_id(vpc_id)
            .send()
            .await
            .context("Failed to create security group")?;

        let sg_id = response
            .group_id()
            .context("No security group ID in response")?
            .to_string();

        info!(sg_id = %sg_id, "Security group created");
        Ok(sg_id)
    }

    /// Allow inbound TCP on `port` from `cidr_ip`
    pub async fn authorize_ingress(&self, group_id: &str, port: u16, cidr_ip: &str) -> Result<()> {
        info!(
            sg_id = %group_id,
            port,
            cidr_ip = %cidr_ip,
            "Adding ingress rule"
        );

        let permission = IpPermission::builder()
            .ip_protocol("tcp")
            .from_port(i32::from(port))
            .to_port(i32::from(port))
            .ip_ranges(
                IpRange::builder()
                    .cidr_ip(cidr_ip)
                    .description(format!("oneliner tcp/{port}"))
                    .build(),
            )
            .build();

        self.client
            .authorize_security_group_ingress()
            .group_id(group_id)
            .ip_permissions(permission)
            .send()
            .await
            .with_context(|| format!("Failed to add ingress rule for port {port}"))?;

        Ok(())
    }
}
