//! EC2 operations trait for testing

use super::Ec2Client;
use super::types::{InstanceSpec, KeyMaterial};
use anyhow::Result;

/// Everything the provisioning pipeline asks of the cloud provider.
///
/// The pipeline is written against this trait so its ordering and
/// fail-fast behavior can be unit tested without hitting real AWS.
#[allow(async_fn_in_trait)] // Internal use only, the pipeline runs on a current-thread runtime
#[cfg_attr(test, mockall::automock)]
pub trait CloudOperations {
    /// Create a VPC and return its id
    async fn create_vpc(&self, cidr: &str) -> Result<String>;

    /// Poll until the VPC is available
    async fn wait_until_vpc_available(&self, vpc_id: &str) -> Result<()>;

    /// Create a DHCP option set and return its id
    async fn create_dhcp_options(
        &self,
        domain_name: &str,
        domain_name_servers: &str,
    ) -> Result<String>;

    /// Associate a DHCP option set with a VPC
    async fn associate_dhcp_options(&self, dhcp_options_id: &str, vpc_id: &str) -> Result<()>;

    /// Availability zone names in enumeration order
    async fn list_availability_zones(&self) -> Result<Vec<String>>;

    /// Create a subnet and return its id
    async fn create_subnet(&self, vpc_id: &str, zone: &str, cidr: &str) -> Result<String>;

    /// Poll until the subnet is available
    async fn wait_until_subnet_available(&self, subnet_id: &str) -> Result<()>;

    /// Create an internet gateway and return its id
    async fn create_internet_gateway(&self) -> Result<String>;

    /// Attach an internet gateway to a VPC
    async fn attach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()>;

    /// Create a route table and return its id
    async fn create_route_table(&self, vpc_id: &str) -> Result<String>;

    /// Route `destination_cidr` to an internet gateway
    async fn create_route(
        &self,
        route_table_id: &str,
        destination_cidr: &str,
        igw_id: &str,
    ) -> Result<()>;

    /// Associate a route table with a subnet
    async fn associate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()>;

    /// Create a security group and return its id
    async fn create_security_group(
        &self,
        name: &str,
        description: &str,
        vpc_id: &str,
    ) -> Result<String>;

    /// Allow inbound TCP on one port from one CIDR
    async fn authorize_ingress(&self, group_id: &str, port: u16, cidr_ip: &str) -> Result<()>;

    /// Delete a key pair by name
    async fn delete_key_pair(&self, key_name: &str) -> Result<()>;

    /// Create a key pair and return its private key
    async fn create_key_pair(&self, key_name: &str) -> Result<KeyMaterial>;

    /// Launch one instance and return its id
    async fn run_instance(&self, spec: InstanceSpec) -> Result<String>;

    /// Poll until instance and system status checks pass
    async fn wait_until_instance_status_ok(&self, instance_id: &str) -> Result<()>;

    /// Public IP address of an instance
    async fn instance_public_ip(&self, instance_id: &str) -> Result<String>;

    /// Apply the `Name` tag (plus standard tags) to a resource
    async fn tag_resource(&self, resource_id: &str, name: &str) -> Result<()>;

    /// Newest image matching a name filter
    async fn find_latest_image(&self, owner: &str, name_filter: &str) -> Result<String>;
}

impl CloudOperations for Ec2Client {
    async fn create_vpc(&self, cidr: &str) -> Result<String> {
        Ec2Client::create_vpc(self, cidr).await
    }

    async fn wait_until_vpc_available(&self, vpc_id: &str) -> Result<()> {
        Ec2Client::wait_until_vpc_available(self, vpc_id).await
    }

    async fn create_dhcp_options(
        &self,
        domain_name: &str,
        domain_name_servers: &str,
    ) -> Result<String> {
        Ec2Client::create_dhcp_options(self, domain_name, domain_name_servers).await
    }

    async fn associate_dhcp_options(&self, dhcp_options_id: &str, vpc_id: &str) -> Result<()> {
        Ec2Client::associate_dhcp_options(self, dhcp_options_id, vpc_id).await
    }

    async fn list_availability_zones(&self) -> Result<Vec<String>> {
        Ec2Client::list_availability_zones(self).await
    }

    async fn create_subnet(&self, vpc_id: &str, zone: &str, cidr: &str) -> Result<String> {
        Ec2Client::create_subnet(self, vpc_id, zone, cidr).await
    }

    async fn wait_until_subnet_available(&self, subnet_id: &str) -> Result<()> {
        Ec2Client::wait_until_subnet_available(self, subnet_id).await
    }

    async fn create_internet_gateway(&self) -> Result<String> {
        Ec2Client::create_internet_gateway(self).await
    }

    async fn attach_internet_gateway(&self, igw_id: &str, vpc_id: &str) -> Result<()> {
        Ec2Client::attach_internet_gateway(self, igw_id, vpc_id).await
    }

    async fn create_route_table(&self, vpc_id: &str) -> Result<String> {
        Ec2Client::create_route_table(self, vpc_id).await
    }

    async fn create_route(
        &self,
        route_table_id: &str,
        destination_cidr: &str,
        igw_id: &str,
    ) -> Result<()> {
        Ec2Client::create_route(self, route_table_id, destination_cidr, igw_id).await
    }

    async fn associate_route_table(&self, route_table_id: &str, subnet_id: &str) -> Result<()> {
        Ec2Client::associate_route_table(self, route_table_id, subnet_id).await
    }

    async fn create_security_group(
        &self,
        name: &str,
        description: &str,
        vpc_id: &str,
    ) -> Result<String> {
        Ec2Client::create_security_group(self, name, description, vpc_id).await
    }

    async fn authorize_ingress(&self, group_id: &str, port: u16, cidr_ip: &str) -> Result<()> {
        Ec2Client::authorize_ingress(self, group_id, port, cidr_ip).await
    }

    async fn delete_key_pair(&self, key_name: &str) -> Result<()> {
        Ec2Client::delete_key_pair(self, key_name).await
    }

    async fn create_key_pair(&self, key_name: &str) -> Result<KeyMaterial> {
        Ec2Client::create_key_pair(self, key_name).await
    }

    async fn run_instance(&self, spec: InstanceSpec) -> Result<String> {
        Ec2Client::run_instance(self, spec).await
    }

    async fn wait_until_instance_status_ok(&self, instance_id: &str) -> Result<()> {
        Ec2Client::wait_until_instance_status_ok(self, instance_id).await
    }

    async fn instance_public_ip(&self, instance_id: &str) -> Result<String> {
        Ec2Client::instance_public_ip(self, instance_id).await
    }

    async fn tag_resource(&self, resource_id: &str, name: &str) -> Result<()> {
        Ec2Client::tag_resource(self, resource_id, name).await
    }

    async fn find_latest_image(&self, owner: &str, name_filter: &str) -> Result<String> {
        Ec2Client::find_latest_image(self, owner, name_filter).await
    }
}
