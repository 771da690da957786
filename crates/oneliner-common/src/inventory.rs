//! Ansible inventory rendering

/// Host alias used in the inventory line
pub const INVENTORY_HOST: &str = "ol";

/// Remote user for the Ubuntu image
pub const INVENTORY_USER: &str = "ubuntu";

/// Render the single inventory line for the provisioned host.
///
/// The key file is referenced relative to the directory the inventory lives
/// in, so both files must be written side by side.
pub fn render_inventory_line(public_ip: &str, key_file: &str) -> String {
    format!(
        "{INVENTORY_HOST} ansible_user={INVENTORY_USER} ansible_ssh_host={public_ip} \
         ansible_ssh_port=22 ansible_ssh_private_key_file=./{key_file}"
    )
}
