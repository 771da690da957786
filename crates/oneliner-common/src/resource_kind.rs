//! Kinds of AWS resources the pipeline creates
//!
//! Each kind knows how its `Name` tag is derived from the configured prefix.

/// Types of AWS resources created by oneliner, in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ResourceKind {
    Vpc,
    DhcpOptions,
    Subnet,
    InternetGateway,
    RouteTable,
    SecurityGroup,
    Instance,
}

impl ResourceKind {
    /// `Name` tag value for a resource of this kind.
    ///
    /// `zone` is only used for subnets, which get one name per availability
    /// zone. The DHCP option set keeps a fixed name independent of the prefix.
    pub fn tag_name(self, prefix: &str, zone: Option<&str>) -> String {
        match self {
            ResourceKind::Vpc => format!("{prefix}-vpc"),
            ResourceKind::DhcpOptions => crate::defaults::DHCP_OPTIONS_NAME.to_string(),
            ResourceKind::Subnet => match zone {
                Some(zone) => format!("{prefix}-sub-{zone}"),
                None => format!("{prefix}-sub"),
            },
            ResourceKind::InternetGateway => format!("{prefix}-igw"),
            ResourceKind::RouteTable => format!("{prefix}-rt"),
            ResourceKind::SecurityGroup => format!("{prefix}-sg"),
            ResourceKind::Instance => format!("{prefix}-instance"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_prefix() {
        assert_eq!(ResourceKind::Vpc.tag_name("oneliner", None), "oneliner-vpc");
        assert_eq!(
            ResourceKind::Subnet.tag_name("oneliner", Some("us-east-1a")),
            "oneliner-sub-us-east-1a"
        );
        assert_eq!(ResourceKind::InternetGateway.tag_name("demo", None), "demo-igw");
        assert_eq!(ResourceKind::RouteTable.tag_name("demo", None), "demo-rt");
        assert_eq!(ResourceKind::SecurityGroup.tag_name("demo", None), "demo-sg");
        assert_eq!(ResourceKind::Instance.tag_name("demo", None), "demo-instance");
    }

    #[test]
    fn dhcp_options_name_is_fixed() {
        assert_eq!(
            ResourceKind::DhcpOptions.tag_name("anything", None),
            "dhcp_options_onliner"
        );
    }

    #[test]
    fn display_is_kebab_case() {
        assert_eq!(ResourceKind::InternetGateway.to_string(), "internet-gateway");
        assert_eq!(ResourceKind::Vpc.to_string(), "vpc");
    }
}
