//! oneliner - single-host AWS demo environment provisioner
//!
//! Builds a VPC with one subnet per availability zone, an internet gateway,
//! a route table, a security group and a key pair, launches one instance
//! with a bootstrap script, and writes an Ansible inventory for it.

pub mod aws;
pub mod config;
pub mod error;
pub mod provisioner;
pub mod public_ip;
pub mod wait;
