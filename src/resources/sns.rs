use serde::{Deserialize, Serialize};

use super::Tag;
use crate::template::CloudFormationResource;

/// AWS::SNS::Topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "DisplayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "Subscription", default, skip_serializing_if = "Vec::is_empty")]
    pub subscription: Vec<Subscription>,

    #[serde(rename = "TopicName", default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CloudFormationResource for Topic {
    const AWS_TYPE: &'static str = "AWS::SNS::Topic";
}

/// AWS::SNS::Topic.Subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(rename = "Endpoint")]
    pub endpoint: String,

    #[serde(rename = "Protocol")]
    pub protocol: String,
}
