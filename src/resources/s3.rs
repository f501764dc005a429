use serde::{Deserialize, Serialize};

use super::Tag;
use crate::template::CloudFormationResource;

/// AWS::S3::Bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    #[serde(rename = "AccessControl", default, skip_serializing_if = "Option::is_none")]
    pub access_control: Option<String>,

    #[serde(rename = "BucketName", default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,

    #[serde(
        rename = "VersioningConfiguration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub versioning_configuration: Option<VersioningConfiguration>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CloudFormationResource for Bucket {
    const AWS_TYPE: &'static str = "AWS::S3::Bucket";
}

/// AWS::S3::Bucket.VersioningConfiguration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersioningConfiguration {
    #[serde(rename = "Status")]
    pub status: String,
}
