//! The ordered provisioning steps

/// One stage of the provisioning pipeline.
///
/// Each step depends on ids produced by the steps before it, so they always
/// run in [`Step::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Step {
    Vpc,
    DhcpOptions,
    Subnets,
    InternetGateway,
    RouteTable,
    SecurityGroup,
    KeyPair,
    Instance,
    PublicIp,
}

impl Step {
    pub const ALL: [Step; 9] = [
        Step::Vpc,
        Step::DhcpOptions,
        Step::Subnets,
        Step::InternetGateway,
        Step::RouteTable,
        Step::SecurityGroup,
        Step::KeyPair,
        Step::Instance,
        Step::PublicIp,
    ];

    /// Progress line shown when the step starts
    pub fn description(self) -> &'static str {
        match self {
            Step::Vpc => "creating VPC...",
            Step::DhcpOptions => "creating DHCP options...",
            Step::Subnets => "creating subnets...",
            Step::InternetGateway => "creating internet gateway...",
            Step::RouteTable => "creating route table...",
            Step::SecurityGroup => "creating security group...",
            Step::KeyPair => "creating key pair...",
            Step::Instance => "launching instance...",
            Step::PublicIp => "fetching instance public IP...",
        }
    }
}
