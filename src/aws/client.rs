use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::Client as Ec2Client;

use crate::{FindError, Result};

/// AWS client wrapper holding the EC2 service client
pub struct AwsClients {
    pub ec2: Ec2Client,
    pub region: String,
}

impl AwsClients {
    /// Create the EC2 client from shared AWS configuration.
    ///
    /// `profile` selects a named credential profile; `region` overrides the
    /// default provider chain (env, profile config, IMDS).
    pub async fn new(profile: Option<&str>, region: Option<&str>) -> Result<Self> {
        let region_provider =
            RegionProviderChain::first_try(region.map(|r| Region::new(r.to_string())))
                .or_default_provider();

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }

        let config = loader.load().await;

        let region = config
            .region()
            .map(|r| r.to_string())
            .ok_or_else(|| FindError::NoRegion("no region configured".to_string()))?;

        Ok(Self {
            ec2: Ec2Client::new(&config),
            region,
        })
    }
}
