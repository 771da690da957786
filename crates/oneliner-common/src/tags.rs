//! AWS resource tag constants for oneliner
//!
//! Every resource the provisioner creates carries a `Name` tag plus these
//! markers, so leftovers can be found from the console when cleaning up by hand.
//!
//! ## Tag Schema
//!
//! | Tag Key | Description |
//! |---------|-------------|
//! | `Name` | Human-readable resource name |
//! | `oneliner:tool` | Static identifier ("oneliner") |
//! | `oneliner:created-at` | RFC 3339 creation timestamp |

/// Tag key shown by the AWS console as the resource name
pub const TAG_NAME: &str = "Name";

/// Tag key for tool identification
pub const TAG_TOOL: &str = "oneliner:tool";

/// Tag value for tool identification
pub const TAG_TOOL_VALUE: &str = "oneliner";

/// Tag key for creation timestamp (RFC 3339 format)
pub const TAG_CREATED_AT: &str = "oneliner:created-at";

/// Helper to format creation timestamp for tags
pub fn format_created_at(time: chrono::DateTime<chrono::Utc>) -> String {
    time.to_rfc3339()
}

/// Key/value pairs applied to a resource named `name` at time `now`
pub fn standard_tags(name: &str, now: chrono::DateTime<chrono::Utc>) -> Vec<(String, String)> {
    vec![
        (TAG_NAME.to_string(), name.to_string()),
        (TAG_TOOL.to_string(), TAG_TOOL_VALUE.to_string()),
        (TAG_CREATED_AT.to_string(), format_created_at(now)),
    ]
}
