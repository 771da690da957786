//! AWS client modules for the provisioner
//!
//! This module provides wrappers around the AWS SDK for:
//! - EC2: network, security group, key pair and instance management
//! - Error classification for AWS error codes

pub mod context;
pub mod ec2;
pub mod error;

pub use context::AwsContext;
pub use ec2::{CloudOperations, Ec2Client, InstanceSpec, KeyMaterial};
pub use error::{AwsError, classify_anyhow_error, classify_aws_error, ignore_not_found};
