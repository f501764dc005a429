use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Tag;
use crate::template::CloudFormationResource;

/// AWS::Lambda::Function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Function {
    #[serde(rename = "Code")]
    pub code: Code,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Environment", default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,

    #[serde(rename = "FunctionName", default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,

    #[serde(rename = "Handler", default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,

    #[serde(rename = "MemorySize", default, skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<i64>,

    #[serde(rename = "Role")]
    pub role: String,

    #[serde(rename = "Runtime", default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,

    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CloudFormationResource for Function {
    const AWS_TYPE: &'static str = "AWS::Lambda::Function";
}

/// AWS::Lambda::Function.Code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(rename = "S3Bucket", default, skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<String>,

    #[serde(rename = "S3Key", default, skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<String>,

    #[serde(rename = "ZipFile", default, skip_serializing_if = "Option::is_none")]
    pub zip_file: Option<String>,
}

/// AWS::Lambda::Function.Environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(rename = "Variables", default, skip_serializing_if = "IndexMap::is_empty")]
    pub variables: IndexMap<String, String>,
}
