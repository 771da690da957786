//! oneliner: provision a single-host AWS demo environment
//!
//! Creates the network, firewall, key pair and instance in one pass, then
//! prints the sample app URL and the cleanup command.

use anyhow::Result;
use clap::Parser;
use oneliner::aws::classify_anyhow_error;
use oneliner::config::{ImageSource, ProvisionConfig};
use oneliner::provisioner::{self, ConsoleReporter};
use oneliner_common::defaults::{
    DEFAULT_BOOTSTRAP_SCRIPT, DEFAULT_IMAGE_ID, DEFAULT_INSTANCE_TYPE, DEFAULT_IP_ECHO_URL,
    DEFAULT_KEY_NAME, DEFAULT_NAME_PREFIX, UBUNTU_IMAGE_OWNER,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "oneliner")]
#[command(about = "Provision a single-host AWS demo environment")]
#[command(version)]
struct Args {
    /// AWS region
    #[arg(long, env = "AWS_DEFAULT_REGION")]
    region: Option<String>,

    /// Script passed to the instance as user-data
    #[arg(long, default_value = DEFAULT_BOOTSTRAP_SCRIPT)]
    bootstrap_script: PathBuf,

    /// Directory the key file and inventory are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Machine image to launch
    #[arg(long, default_value = DEFAULT_IMAGE_ID)]
    image_id: String,

    /// EC2 instance type
    #[arg(long, default_value = DEFAULT_INSTANCE_TYPE)]
    instance_type: String,

    /// Launch the newest image whose name matches this filter instead of --image-id
    /// (e.g., "ubuntu/images/hvm-ssd/ubuntu-xenial-16.04-amd64*")
    #[arg(long)]
    ami_name_filter: Option<String>,

    /// Image owner used with --ami-name-filter
    #[arg(long, default_value = UBUNTU_IMAGE_OWNER)]
    ami_owner: String,

    /// Endpoint that returns this machine's public IP as plain text
    #[arg(long, default_value = DEFAULT_IP_ECHO_URL)]
    ip_echo_url: String,

    /// Prefix for resource names
    #[arg(long, default_value = DEFAULT_NAME_PREFIX)]
    name_prefix: String,

    /// Key pair name; the private key is saved as <name>.pem
    #[arg(long, default_value = DEFAULT_KEY_NAME)]
    key_name: String,
}

impl From<Args> for ProvisionConfig {
    fn from(args: Args) -> Self {
        let mut config = ProvisionConfig::new(args.region.unwrap_or_default());

        config.network.name_prefix = args.name_prefix;
        config.instance.image = match args.ami_name_filter {
            Some(name_filter) => ImageSource::NewestMatching {
                owner: args.ami_owner,
                name_filter,
            },
            None => ImageSource::Fixed(args.image_id),
        };
        config.instance.instance_type = args.instance_type;
        config.instance.key_name = args.key_name;
        config.instance.bootstrap_script = args.bootstrap_script;
        config.ip_echo_url = args.ip_echo_url;
        config.output_dir = args.output_dir;
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print error in a user-friendly way
fn print_error(e: &anyhow::Error) {
    use std::io::Write;

    let mut stderr = std::io::stderr();

    let _ = writeln!(stderr, "\n\x1b[1;31mError:\x1b[0m {e}");

    let mut source = e.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "  \x1b[33mCaused by:\x1b[0m {cause}");
        source = cause.source();
    }

    if let Some(suggestion) = classify_anyhow_error(e).suggestion() {
        let _ = writeln!(stderr, "\n\x1b[36mHint:\x1b[0m {suggestion}");
    }

    if std::env::var("RUST_BACKTRACE").is_err() {
        let _ = writeln!(
            stderr,
            "\n\x1b[2mSet RUST_BACKTRACE=1 for a detailed backtrace\x1b[0m"
        );
    } else {
        let backtrace = e.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            let _ = writeln!(stderr, "\n\x1b[2mBacktrace:\x1b[0m\n{backtrace}");
        }
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ProvisionConfig::from(args);
    info!(
        region = %config.region,
        image = ?config.instance.image,
        instance_type = %config.instance.instance_type,
        "Starting provisioning"
    );

    provisioner::run(&config, &ConsoleReporter::new()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_the_demo_config() {
        let args = Args::try_parse_from(["oneliner", "--region", "eu-west-1"]).unwrap();
        let config = ProvisionConfig::from(args);

        assert_eq!(config.region, "eu-west-1");
        assert_eq!(
            config.instance.image,
            ImageSource::Fixed("ami-13c15e69".to_string())
        );
        assert_eq!(config.instance.key_name, "oneliner-key");
        assert_eq!(config.network.name_prefix, "oneliner");
        assert_eq!(
            config.instance.bootstrap_script,
            PathBuf::from("install_python.sh")
        );
    }

    #[test]
    fn name_filter_switches_to_image_lookup() {
        let args = Args::try_parse_from([
            "oneliner",
            "--region",
            "us-east-1",
            "--ami-name-filter",
            "ubuntu/images/*",
        ])
        .unwrap();
        let config = ProvisionConfig::from(args);

        assert_eq!(
            config.instance.image,
            ImageSource::NewestMatching {
                owner: "099720109477".to_string(),
                name_filter: "ubuntu/images/*".to_string(),
            }
        );
    }
}
