//! EC2 instance launch and readiness

use super::Ec2Client;
use super::types::InstanceSpec;
use crate::aws::error::ignore_not_found;
use crate::wait::wait_for_resource;
use anyhow::{Context, Result};
use aws_sdk_ec2::types::{InstanceNetworkInterfaceSpecification, InstanceType, SummaryStatus};
use tracing::{debug, info};

impl Ec2Client {
    /// Launch exactly one instance and return its id
    pub async fn run_instance(&self, spec: InstanceSpec) -> Result<String> {
        info!(
            image_id = %spec.image_id,
            instance_type = %spec.instance_type,
            subnet_id = %spec.subnet_id,
            "Launching instance"
        );

        let response = self
            .client
            .run_instances()
            .image_id(&spec.image_id)
            .instance_type(InstanceType::from(spec.instance_type.as_str()))
            .min_count(1)
            .max_count(1)
            .key_name(&spec.key_name)
            .user_data(&spec.user_data_b64)
            .network_interfaces(
                InstanceNetworkInterfaceSpecification::builder()
                    .subnet_id(&spec.subnet_id)
                    .device_index(0)
                    .associate_public_ip_address(true)
                    .groups(&spec.security_group_id)
                    .build(),
            )
            .send()
            .await
            .context("Failed to launch instance")?;

        let instance_id = response
            .instances()
            .first()
            .and_then(|i| i.instance_id())
            .context("No instance returned")?
            .to_string();

        info!(instance_id = %instance_id, "Instance launched");
        Ok(instance_id)
    }

    /// Poll until both the instance and system status checks report `ok`
    pub async fn wait_until_instance_status_ok(&self, instance_id: &str) -> Result<()> {
        info!(
            instance_id = %instance_id,
            timeout_secs = self.wait.instance_timeout.as_secs(),
            "Waiting for instance status checks"
        );

        wait_for_resource(
            self.wait.instance(),
            || async {
                let response = self
                    .client
                    .describe_instance_status()
                    .instance_ids(instance_id)
                    .send()
                    .await;
                let Some(response) =
                    ignore_not_found(response).context("Failed to describe instance status")?
                else {
                    return Ok(false);
                };

                // Only running instances are listed, so an empty result means "not yet"
                let Some(status) = response.instance_statuses().first() else {
                    return Ok(false);
                };

                let instance_ok = matches!(
                    status.instance_status().and_then(|s| s.status()),
                    Some(SummaryStatus::Ok)
                );
                let system_ok = matches!(
                    status.system_status().and_then(|s| s.status()),
                    Some(SummaryStatus::Ok)
                );
                debug!(instance_id = %instance_id, instance_ok, system_ok, "Instance status");
                Ok(instance_ok && system_ok)
            },
            &format!("EC2 instance {instance_id} status ok"),
        )
        .await?;

        info!(instance_id = %instance_id, "Instance status checks passed");
        Ok(())
    }

    /// Public IPv4 address of a running instance
    pub async fn instance_public_ip(&self, instance_id: &str) -> Result<String> {
        let response = self
            .client
            .describe_instances()
            .instance_ids(instance_id)
            .send()
            .await
            .context("Failed to describe instance")?;

        let instance = response
            .reservations()
            .first()
            .and_then(|r| r.instances().first())
            .context("Instance not found")?;

        let ip = instance
            .public_ip_address()
            .with_context(|| format!("Instance {instance_id} has no public IP address"))?
            .to_string();

        debug!(instance_id = %instance_id, public_ip = %ip, "Found instance public IP");
        Ok(ip)
    }
}
