//! EC2 integration tests - actually call AWS APIs
//!
//! These tests are marked `#[ignore]` and only run with:
//! ```
//! AWS_PROFILE=your_profile cargo test --test aws_ec2_integration -- --ignored
//! ```


use aws_test_helpers::*;
use oneliner::aws::Ec2Client;
use oneliner_common::defaults::{DEFAULT_VPC_CIDR, UBUNTU_IMAGE_NAME_FILTER, UBUNTU_IMAGE_OWNER};
use oneliner_common::subnet_plan;

/// The newest Ubuntu image can be resolved by name filter
#[tokio::test]
#[ignore]
async fn test_find_latest_ubuntu_image() {
    let region = get_test_region();
    let client = Ec2Client::new(&region)
        .await
        .expect("AWS credentials required - set AWS_PROFILE or AWS_ACCESS_KEY_ID");

    let ami = client
        .find_latest_image(UBUNTU_IMAGE_OWNER, UBUNTU_IMAGE_NAME_FILTER)
        .await
        .expect("Should find an Ubuntu image");
    assert!(
        ami.starts_with("ami-"),
        "AMI ID should start with 'ami-', got: {}",
        ami
    );
}

/// Every region has at least one zone and each gets a distinct /24
#[tokio::test]
#[ignore]
async fn test_availability_zones_fit_subnet_plan() {
    let region = get_test_region();
    let client = Ec2Client::new(&region)
        .await
        .expect("AWS credentials required");

    let zones = client
        .list_availability_zones()
        .await
        .expect("Should list availability zones");
    assert!(!zones.is_empty());
    assert!(
        zones.iter().all(|z| z.starts_with(&region)),
        "Zones should belong to {region}: {zones:?}"
    );

    let plan = subnet_plan(DEFAULT_VPC_CIDR, zones.as_slice())
        .expect("Zone count should fit in the default VPC CIDR");
    assert_eq!(plan[0].1, "192.168.1.0/24");
}

/// Key pairs can be replaced: delete is a no-op when absent, create returns PEM material
#[tokio::test]
#[ignore]
async fn test_key_pair_lifecycle() {
    let region = get_test_region();
    let client = Ec2Client::new(&region)
        .await
        .expect("AWS credentials required");

    let key_name = test_resource_name();

    client
        .delete_key_pair(&key_name)
        .await
        .expect("Deleting a missing key pair should succeed");

    let material = client
        .create_key_pair(&key_name)
        .await
        .expect("Should create key pair");
    assert!(material.as_str().contains("PRIVATE KEY"));

    client
        .delete_key_pair(&key_name)
        .await
        .expect("Should delete key pair");
}
