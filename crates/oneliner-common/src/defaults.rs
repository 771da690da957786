//! Default configuration values for the provisioner
//!
//! Every value here can be overridden from the command line; these are the
//! settings the demo environment is built with when nothing is passed.

/// CIDR block for the VPC
pub const DEFAULT_VPC_CIDR: &str = "192.168.0.0/16";

/// Prefix for every `Name` tag and for the security group name
pub const DEFAULT_NAME_PREFIX: &str = "oneliner";

/// Destination for the default route ("anywhere")
pub const ANYWHERE_CIDR: &str = "0.0.0.0/0";

/// Ubuntu 16.04 image in us-east-1
pub const DEFAULT_IMAGE_ID: &str = "ami-13c15e69";

/// Instance size for the demo host
pub const DEFAULT_INSTANCE_TYPE: &str = "t2.medium";

/// Name of the SSH key pair, also the stem of the private-key file
pub const DEFAULT_KEY_NAME: &str = "oneliner-key";

/// Bootstrap script passed to the instance as user-data
pub const DEFAULT_BOOTSTRAP_SCRIPT: &str = "install_python.sh";

/// File the inventory line is written to
pub const INVENTORY_FILENAME: &str = "inventory";

/// Endpoint that echoes the caller's public IP as a plain-text body
pub const DEFAULT_IP_ECHO_URL: &str = "http://ipecho.net/plain";

/// Port the sample application listens on
pub const APP_PORT: u16 = 8000;

/// SSH port
pub const SSH_PORT: u16 = 22;

/// Description attached to the security group
pub const SECURITY_GROUP_DESCRIPTION: &str = "oneliner 8000/22";

/// DHCP `domain-name` option
pub const DHCP_DOMAIN_NAME: &str = "ec2.internal";

/// DHCP `domain-name-servers` option
pub const DHCP_DOMAIN_NAME_SERVERS: &str = "AmazonProvidedDNS";

/// `Name` tag of the DHCP option set (kept as the historical spelling)
pub const DHCP_OPTIONS_NAME: &str = "dhcp_options_onliner";

/// Owner of the official Ubuntu images (Canonical)
pub const UBUNTU_IMAGE_OWNER: &str = "099720109477";

/// Name filter used when the image is resolved dynamically
pub const UBUNTU_IMAGE_NAME_FILTER: &str = "ubuntu/images/hvm-ssd/ubuntu-xenial-16.04-amd64*";

/// Environment variables that must be set before any AWS call is made
pub const REQUIRED_ENV_VARS: [&str; 3] = [
    "AWS_DEFAULT_REGION",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
];

/// Returns the private-key filename for a key pair name
pub fn key_file_name(key_name: &str) -> String {
    format!("{key_name}.pem")
}
