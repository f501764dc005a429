use serde::{Deserialize, Serialize};

use super::Tag;
use crate::template::CloudFormationResource;

/// AWS::SQS::Queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    #[serde(rename = "DelaySeconds", default, skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<i64>,

    #[serde(rename = "FifoQueue", default, skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<bool>,

    #[serde(rename = "KmsMasterKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<String>,

    #[serde(rename = "QueueName", default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<String>,

    #[serde(rename = "RedrivePolicy", default, skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<RedrivePolicy>,

    #[serde(
        rename = "VisibilityTimeout",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_timeout: Option<i64>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CloudFormationResource for Queue {
    const AWS_TYPE: &'static str = "AWS::SQS::Queue";
}

/// Dead-letter settings. `dead_letter_target_arn` usually holds a `Fn::GetAtt` token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedrivePolicy {
    #[serde(rename = "deadLetterTargetArn")]
    pub dead_letter_target_arn: String,

    #[serde(rename = "maxReceiveCount")]
    pub max_receive_count: i64,
}
