//! Local inputs and outputs of a run: user-data, key file, inventory and
//! the lines printed at the end

use anyhow::{Context, Result};
use base64::Engine;
use oneliner_common::defaults::APP_PORT;
use oneliner_common::render_inventory_line;
use std::path::Path;
use tracing::debug;

/// Read the bootstrap script and encode it for RunInstances
pub async fn load_user_data(script: &Path) -> Result<String> {
    let content = tokio::fs::read(script)
        .await
        .with_context(|| format!("Failed to read bootstrap script {}", script.display()))?;
    debug!(path = %script.display(), bytes = content.len(), "Loaded bootstrap script");
    Ok(encode_user_data(&content))
}

pub fn encode_user_data(script: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(script)
}

/// Write the private key, readable by the owner only.
///
/// On Unix the file is created with mode 0600, and a file left over from an
/// earlier run is tightened to 0600 as well.
pub async fn write_key_file(path: &Path, pem: &str) -> Result<()> {
    use tokio::io::AsyncWriteExt;

    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options
        .open(path)
        .await
        .with_context(|| format!("Failed to create key file {}", path.display()))?;

    // `mode` only applies when the file is created
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .await
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    file.write_all(pem.as_bytes())
        .await
        .with_context(|| format!("Failed to write key file {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("Failed to write key file {}", path.display()))?;

    debug!(path = %path.display(), "Wrote key file");
    Ok(())
}

/// Write the one-line Ansible inventory
pub async fn write_inventory(path: &Path, public_ip: &str, key_file_name: &str) -> Result<()> {
    let line = render_inventory_line(public_ip, key_file_name);
    tokio::fs::write(path, line)
        .await
        .with_context(|| format!("Failed to write inventory {}", path.display()))?;
    debug!(path = %path.display(), "Wrote inventory");
    Ok(())
}

pub fn app_url_line(public_ip: &str) -> String {
    format!("###### SAMPLE APP URL: http://{public_ip}:{APP_PORT} ######")
}

pub fn cleanup_line(vpc_id: &str, instance_id: &str) -> String {
    format!("CLEANUP: ./cleanup.sh {vpc_id} {instance_id}")
}
