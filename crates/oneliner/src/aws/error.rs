//! AWS error classification and handling
//!
//! Provides typed errors for AWS SDK operations using the `.code()` method
//! instead of string matching on Debug format.

use aws_sdk_ec2::error::ProvideErrorMetadata;
use aws_sdk_ec2::operation as ops;
use thiserror::Error;

/// AWS error categories
#[derive(Debug, Error)]
pub enum AwsError {
    /// Resource was not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Resource already exists
    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    Throttled,

    /// Credentials rejected or missing permissions
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    /// Generic AWS SDK error with code and message
    #[error("AWS error: {message}")]
    Sdk {
        code: Option<String>,
        message: String,
    },
}

impl AwsError {
    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, AwsError::NotFound(_))
    }

    /// Get a user-friendly suggestion for resolving this error, if available.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            AwsError::Sdk { code: Some(c), .. } => suggestion_for_code(c),
            AwsError::NotFound(msg) if msg.contains("AMI") || msg.contains("ami-") => {
                suggestion_for_code("InvalidAMIID.NotFound")
            }
            AwsError::Unauthorized(_) => suggestion_for_code("AuthFailure"),
            AwsError::AlreadyExists(_) => suggestion_for_code("InvalidGroup.Duplicate"),
            _ => None,
        }
    }
}

/// Known AWS error codes for "not found" conditions
const NOT_FOUND_CODES: &[&str] = &[
    "InvalidKeyPair.NotFound",
    "InvalidVpcID.NotFound",
    "InvalidSubnetID.NotFound",
    "InvalidInstanceID.NotFound",
    "InvalidGroup.NotFound",
    "InvalidAMIID.NotFound",
    "InvalidRouteTableID.NotFound",
    "InvalidInternetGatewayID.NotFound",
];

/// Known AWS error codes for "already exists" conditions
const ALREADY_EXISTS_CODES: &[&str] = &[
    "InvalidKeyPair.Duplicate",
    "InvalidGroup.Duplicate",
    "InvalidPermission.Duplicate",
];

/// Known AWS error codes for throttling/rate limiting
const THROTTLING_CODES: &[&str] = &["Throttling", "ThrottlingException", "RequestLimitExceeded"];

/// Known AWS error codes for credential/permission failures
const UNAUTHORIZED_CODES: &[&str] = &["AuthFailure", "UnauthorizedOperation", "OptInRequired"];

/// Classify an AWS SDK error using the error code.
pub fn classify_aws_error(code: Option<&str>, message: Option<&str>) -> AwsError {
    let message = message.unwrap_or("Unknown error").to_string();

    match code {
        Some(c) if NOT_FOUND_CODES.contains(&c) => AwsError::NotFound(message),
        Some(c) if ALREADY_EXISTS_CODES.contains(&c) => AwsError::AlreadyExists(message),
        Some(c) if THROTTLING_CODES.contains(&c) => AwsError::Throttled,
        Some(c) if UNAUTHORIZED_CODES.contains(&c) => AwsError::Unauthorized(message),
        _ => AwsError::Sdk {
            code: code.map(|s| s.to_string()),
            message,
        },
    }
}

/// Classify any error carrying AWS error metadata.
pub fn classify_sdk_error<E: ProvideErrorMetadata>(error: &E) -> AwsError {
    classify_aws_error(error.code(), error.message())
}

/// Turn a "not found" failure into `Ok(None)`, passing everything else through.
pub fn ignore_not_found<T, E>(result: Result<T, E>) -> Result<Option<T>, E>
where
    E: ProvideErrorMetadata,
{
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if classify_sdk_error(&e).is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Downcast one link of an error chain to the operation error `E`.
fn classify_as<E>(cause: &(dyn std::error::Error + 'static)) -> Option<AwsError>
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    cause.downcast_ref::<E>().map(classify_sdk_error)
}

/// Operation errors produced by the EC2 calls the provisioner makes.
///
/// A service `SdkError` reports its operation error as `source()`, so these
/// show up as a link of the anyhow chain.
const OPERATION_CLASSIFIERS: &[fn(&(dyn std::error::Error + 'static)) -> Option<AwsError>] = &[
    classify_as::<ops::create_vpc::CreateVpcError>,
    classify_as::<ops::describe_vpcs::DescribeVpcsError>,
    classify_as::<ops::create_dhcp_options::CreateDhcpOptionsError>,
    classify_as::<ops::associate_dhcp_options::AssociateDhcpOptionsError>,
    classify_as::<ops::describe_availability_zones::DescribeAvailabilityZonesError>,
    classify_as::<ops::create_subnet::CreateSubnetError>,
    classify_as::<ops::describe_subnets::DescribeSubnetsError>,
    classify_as::<ops::create_internet_gateway::CreateInternetGatewayError>,
    classify_as::<ops::attach_internet_gateway::AttachInternetGatewayError>,
    classify_as::<ops::create_route_table::CreateRouteTableError>,
    classify_as::<ops::create_route::CreateRouteError>,
    classify_as::<ops::associate_route_table::AssociateRouteTableError>,
    classify_as::<ops::create_security_group::CreateSecurityGroupError>,
    classify_as::<ops::authorize_security_group_ingress::AuthorizeSecurityGroupIngressError>,
    classify_as::<ops::delete_key_pair::DeleteKeyPairError>,
    classify_as::<ops::create_key_pair::CreateKeyPairError>,
    classify_as::<ops::run_instances::RunInstancesError>,
    classify_as::<ops::describe_instance_status::DescribeInstanceStatusError>,
    classify_as::<ops::describe_instances::DescribeInstancesError>,
    classify_as::<ops::create_tags::CreateTagsError>,
    classify_as::<ops::describe_images::DescribeImagesError>,
];

/// Classify an anyhow::Error by finding the AWS error in its chain.
///
/// SDK errors are wrapped in `anyhow` with context by the time they reach
/// `main`. The chain is walked for a typed EC2 operation error first; the
/// rendered messages are only searched for known codes as a fallback.
pub fn classify_anyhow_error(error: &anyhow::Error) -> AwsError {
    for cause in error.chain() {
        let typed = OPERATION_CLASSIFIERS
            .iter()
            .find_map(|classify| classify(cause));
        if let Some(classified) = typed {
            return classified;
        }
    }

    let rendered = format!("{:#}", error);
    if let Some(code) = extract_error_code(&rendered) {
        return classify_aws_error(Some(&code), Some(&error.root_cause().to_string()));
    }

    AwsError::Sdk {
        code: None,
        message: error.to_string(),
    }
}

/// Known AWS error codes searched for in rendered error messages
const ALL_KNOWN_CODES: &[&str] = &[
    // Not found
    "InvalidKeyPair.NotFound",
    "InvalidVpcID.NotFound",
    "InvalidSubnetID.NotFound",
    "InvalidInstanceID.NotFound",
    "InvalidGroup.NotFound",
    "InvalidAMIID.NotFound",
    "InvalidRouteTableID.NotFound",
    "InvalidInternetGatewayID.NotFound",
    // Already exists
    "InvalidKeyPair.Duplicate",
    "InvalidGroup.Duplicate",
    "InvalidPermission.Duplicate",
    // Throttling
    "ThrottlingException",
    "Throttling",
    "RequestLimitExceeded",
    // Auth
    "AuthFailure",
    "UnauthorizedOperation",
    "OptInRequired",
    // Limits
    "VpcLimitExceeded",
    "InternetGatewayLimitExceeded",
    "InstanceLimitExceeded",
    "VcpuLimitExceeded",
    // Capacity
    "InsufficientInstanceCapacity",
    "Unsupported",
];

/// Find a known AWS error code in a rendered error message
fn extract_error_code(rendered: &str) -> Option<String> {
    ALL_KNOWN_CODES
        .iter()
        .find(|code| rendered.contains(*code))
        .map(|code| (*code).to_string())
}

/// Error code to user-friendly suggestion mapping
const SUGGESTIONS: &[(&str, &str)] = &[
    (
        "InvalidAMIID.NotFound",
        "Image ids are region specific. Pass --image-id for your region or use --ami-name-filter.",
    ),
    (
        "AuthFailure",
        "Check AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY.",
    ),
    (
        "InvalidGroup.Duplicate",
        "A previous run left resources behind. Run the printed cleanup command or delete them by hand.",
    ),
    (
        "VpcLimitExceeded",
        "The region is at its VPC quota. Delete VPCs from earlier runs or request a limit increase.",
    ),
    (
        "InternetGatewayLimitExceeded",
        "The region is at its internet gateway quota. Delete unused gateways.",
    ),
    (
        "InstanceLimitExceeded",
        "Request a service limit increase via AWS Service Quotas console.",
    ),
    (
        "VcpuLimitExceeded",
        "Request a service limit increase via AWS Service Quotas console.",
    ),
    (
        "InsufficientInstanceCapacity",
        "Try a different instance type or region.",
    ),
    (
        "Unsupported",
        "This instance type may not be available in every availability zone of this region.",
    ),
];

/// Get a user-friendly suggestion for a known error code.
fn suggestion_for_code(code: &str) -> Option<String> {
    SUGGESTIONS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, s)| (*s).to_string())
}
