//! EC2 resource management

mod instance;
mod key_pair;
mod network;
mod operations;
mod security_group;
mod types;

pub use operations::CloudOperations;
pub use types::{InstanceSpec, KeyMaterial};

#[cfg(test)]
pub use operations::MockCloudOperations;

use crate::aws::context::AwsContext;
use crate::config::WaitSettings;
use anyhow::{Context, Result};
use aws_sdk_ec2::{Client, types::Filter, types::Tag};
use oneliner_common::{ImageRecord, newest_image_id, tags};
use tracing::{debug, info, warn};

/// EC2 client for the provisioning pipeline
pub struct Ec2Client {
    pub(crate) client: Client,
    pub(crate) wait: WaitSettings,
}

impl Ec2Client {
    /// Create a new EC2 client (loads AWS config from environment)
    pub async fn new(region: &str) -> Result<Self> {
        let ctx = AwsContext::new(region).await;
        Ok(Self::from_context(&ctx))
    }

    /// Create an EC2 client from a pre-loaded AWS context
    pub fn from_context(ctx: &AwsContext) -> Self {
        Self {
            client: ctx.ec2_client(),
            wait: WaitSettings::default(),
        }
    }

    /// Override the poll-until-ready timeouts
    pub fn with_wait_settings(mut self, wait: WaitSettings) -> Self {
        self.wait = wait;
        self
    }

    /// Apply the `Name` tag and the standard oneliner tags to a resource
    pub async fn tag_resource(&self, resource_id: &str, name: &str) -> Result<()> {
        let mut request = self.client.create_tags().resources(resource_id);
        for (key, value) in tags::standard_tags(name, chrono::Utc::now()) {
            request = request.tags(Tag::builder().key(key).value(value).build());
        }

        request
            .send()
            .await
            .with_context(|| format!("Failed to tag {resource_id} as {name}"))?;

        debug!(resource_id = %resource_id, name = %name, "Tagged resource");
        Ok(())
    }

    /// Find the newest available image owned by `owner` whose name matches `name_filter`
    pub async fn find_latest_image(&self, owner: &str, name_filter: &str) -> Result<String> {
        let response = self
            .client
            .describe_images()
            .owners(owner)
            .filters(Filter::builder().name("name").values(name_filter).build())
            .filters(Filter::builder().name("state").values("available").build())
            .send()
            .await
            .context("Failed to describe images")?;

        let records: Vec<ImageRecord> = response
            .images()
            .iter()
            .filter_map(|img| {
                let id = img.image_id()?;
                let created = img.creation_date()?;
                let record = ImageRecord::parse(id, created);
                if record.is_none() {
                    warn!(image_id = %id, creation_date = %created, "Skipping image with unparseable creation date");
                }
                record
            })
            .collect();

        let ami = newest_image_id(&records)
            .with_context(|| format!("No image found matching '{name_filter}'"))?;

        info!(ami = %ami, filter = %name_filter, candidates = records.len(), "Found newest image");

        Ok(ami.to_string())
    }
}
