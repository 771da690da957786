//! VPC, DHCP options, subnets, internet gateway and route table

use super::Ec2Client;
use crate::aws::error::ignore_not_found;
use crate::wait::wait_for_resource;
use anyhow::{Context, Result};
use aws_sdk_ec2::types::{NewDhcpConfiguration, SubnetState, VpcState};
use tracing::{debug, info};

impl Ec2Client {
    /// Create a VPC and return its id
    pub async fn create_vpc(&self, cidr: &str) -> Result<String> {
        info!(cidr = %cidr, "Creating VPC");

        let response = self
            .client
            .create_vpc()
            .cidr_block(cidr)
            .send()
            .await
            .context("Failed to create VPC")?;

        let vpc_id = response
            .vpc()
            .and_then(|v| v.vpc_id())
            .context("No VPC ID in response")?
            .to_string();

        info!(vpc_id = %vpc_id, "VPC created");
        Ok(vpc_id)
    }

    /// Poll until the VPC reports `available`
    pub async fn wait_until_vpc_available(&self, vpc_id: &str) -> Result<()> {
        wait_for_resource(
            self.wait.network(),
            || async {
                let response = self.client.describe_vpcs().vpc_ids(vpc_id).send().await;
                // A fresh id can be briefly unknown to DescribeVpcs
                let Some(response) =
                    ignore_not_found(response).context("Failed to describe VPC")?
                else {
                    return Ok(false);
                };
                let state = response.vpcs().first().and_then(|v| v.state());
                Ok(matches!(state, Some(VpcState::Available)))
            },
            &format!("VPC {vpc_id} available"),
        )
        .await
    }

    /// Create a DHCP option set with a domain name and DNS servers
    pub async fn create_dhcp_options(
        &self,
        domain_name: &str,
        domain_name_servers: &str,
    ) -> Result<String> {
        let response = self
            .client
            .create_dhcp_options()
            .dhcp_configurations(
                NewDhcpConfiguration::builder()
                    .key("domain-name")
                    .values(domain_name)
                    .build(),
            )
            .dhcp_configurations(
                NewDhcpConfiguration::builder()
                    .key("domain-name-servers")
                    .values(domain_name_servers)
                    .build(),
            )
            .send()
            .await
            .context("Failed to create DHCP options")?;

        let dhcp_options_id = response
            .dhcp_options()
            .and_then(|d| d.dhcp_options_id())
            .context("No DHCP options ID in response")?
            .to_string();

        debug!(dhcp_options_id = %dhcp_options_id, "DHCP options created");
        Ok(dhcp_options_id)
    }

    /// Associate a DHCP option set with a VPC
    pub async fn associate_dhcp_options(&self, dhcp_options_id: &str, vpc_id: &str) -> Result<()> {
        self.client
            .associate_dhcp_options()
            .dhcp_options_id(dhcp_options_id)
            .vpc_id(vpc_id)
            .send()
            .await
            .context("Failed to associate DHCP options with VPC")?;

        debug!(dhcp_options_id = %dhcp_options_id, vpc_id = %vpc_id, "DHCP options associated");
        Ok(())
    }

    /// Availability zone names of the client's region, in API order
    pub async fn list_availability_zones(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .describe_availability_zones()
            .send()
            .await
            .context("Failed to describe availability zones")?;

        let zones: Vec<String> = response
            .availability_zones()
            .iter()
            .filter_map(|az| az.zone_name().map(str::to_string))
            .collect();

        if zones.is_empty() {
            anyhow::bail!("No availability zones returned for region");
        }

        debug!(zones = ?zones, "Found availability zones");
        Ok(zones)
    }

    /// Create a subnet in one availability zone
    pub async fn create_subnet(&self, vpc_id: &str, zone: &str, cidr: &str) -> Result<String> {
        let response = self
            .client
            .create_subnet()
            .vpc_id(vpc_id)
            .availability_zone(zone)
            .cidr_block(cidr)
            .send()
            .await
            .with_context(|| format!("Failed to create subnet {cidr} in {zone}"))?;

        let subnet_id = response
            .subnet()
            .and_then(|s| s.subnet_id())
            .context("No subnet ID in response")?
            .to_string();

        info!(subnet_id = %subnet_id, zone = %zone, cidr = %cidr, "Subnet created");
        Ok(subnet_id)
    }

    /// Poll until the subnet reports `available`
    pub async fn wait_until_subnet_available(&self, subnet_id: &str) -> Result<()> {
        wait_for_resource(
            self.wait.network(),
            || async {
                let response = self
                    .client
                    .describe_subnets()
                    .subnet_ids(subnet_id)
                    .send()
                    .await;
                let Some(response) =
                    ignore_not_found(response).context("Failed to describe subnet")?
                else {
                    return Ok(false);
                };
                let state = response.subnets().first().and_then(|s| s.state());
                Ok(matches!(state, Some(SubnetState::Available)))
            },
            &format!("subnet {subnet_id} available"),
        )
        .await
    }

    /// Create an internet gateway
    pub async fn create_internet_gateway(&self) -> Result<String> {
        let response = self
            .client
            .create_internet_gateway()
            .send()
            .await
            .context("Failed to create internet gateway")?;

        let igw_id = response
            .internet_gateway()
            .and_then(|g| g.internet_gateway_id())
            .context("No internet gateway ID in response")?
            .to_string();

        info!(igw_id = %igw_id, "Internet gateway created");
        Ok(igw_id)
    }

    /// Attach an internet gateway to a VPC
    pub async fn attach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()> {
        self.client
            .attach_internet_gateway()
            .internet_gateway_id(igw_id)
            .vpc_id(vpc_id)
            .send()
            .await
            .context("Failed to attach internet gateway to VPC")?;

        debug!(igw_id = %igw_id, vpc_id = %vpc_id, "Internet gateway attached");
        Ok(())
    }

    /// Create a route table in a VPC
    pub async fn create_route_table(&self, vpc_id: &str) -> Result<String> {
        let response = self
            .client
            .create_route_table()
            .vpc_id(vpc_id)
            .send()
            .await
            .context("Failed to create route table")?;

        let route_table_id = response
            .route_table()
            .and_then(|rt| rt.route_table_id())
            .context("No route table ID in response")?
            .to_string();

        info!(route_table_id = %route_table_id, "Route table created");
        Ok(route_table_id)
    }

    /// Add a route sending `destination_cidr` to an internet gateway
    pub async fn create_route(
        &self,
        route_table_id: &str,
        destination_cidr: &str,
        igw_id: &str,
    ) -> Result<()> {
        self.client
            .create_route()
            .route_table_id(route_table_id)
            .destination_cidr_block(destination_cidr)
            .gateway_id(igw_id)
            .send()
            .await
            .with_context(|| format!("Failed to create route {destination_cidr} -> {igw_id}"))?;

        debug!(route_table_id = %route_table_id, destination = %destination_cidr, igw_id = %igw_id, "Route created");
        Ok(())
    }

    /// Associate a route table with a subnet
    pub async fn associate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()> {
        self.client
            .associate_route_table()
            .route_table_id(route_table_id)
            .subnet_id(subnet_id)
            .send()
            .await
            .context("Failed to associate route table with subnet")?;

        debug!(route_table_id = %route_table_id, subnet_id = %subnet_id, "Route table associated");
        Ok(())
    }
}
