//! oneliner-common - Shared types and utilities
//!
//! This crate holds the parts of the provisioner that do not talk to AWS,
//! so they can be tested without credentials or an SDK dependency.
//!
//! ## Modules
//!
//! - [`defaults`]: Default configuration values
//! - [`image`]: Newest-image selection
//! - [`inventory`]: Ansible inventory line rendering
//! - [`network`]: CIDR derivation for subnets and ingress rules
//! - [`resource_kind`]: The kinds of resources the pipeline creates
//! - [`tags`]: AWS resource tag constants

pub mod defaults;
pub mod image;
pub mod inventory;
pub mod network;
pub mod resource_kind;
pub mod tags;

pub use image::{ImageRecord, newest_image_id};
pub use inventory::render_inventory_line;
pub use network::{CidrError, host_cidr, parse_vpc_cidr, subnet_cidr, subnet_plan};
pub use resource_kind::ResourceKind;
