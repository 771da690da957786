//! Configuration errors
//!
//! Typed errors for problems detected before any AWS call is made.

use oneliner_common::CidrError;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or blank
    #[error("Missing environment variable {0}")]
    MissingEnvVar(String),

    /// Region resolved to an empty string
    #[error("region cannot be empty")]
    EmptyRegion,

    /// Name prefix would produce empty resource names
    #[error("name_prefix cannot be empty")]
    EmptyNamePrefix,

    /// VPC CIDR cannot be split into `/24` subnets
    #[error("vpc_cidr is unusable: {0}")]
    InvalidVpcCidr(#[source] CidrError),

    /// Key pair name is empty
    #[error("key_name cannot be empty")]
    EmptyKeyName,

    /// Neither an image id nor an image name filter is set
    #[error("image_id cannot be empty unless an image name filter is given")]
    MissingImage,
}
