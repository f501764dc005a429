use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// The `{Type, Properties, ...}` envelope every resource is written in.
///
/// Properties are kept as generic JSON so one template can hold resources of
/// any type. Typed access goes through [`CloudFormationResource`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,

    #[serde(rename = "Properties", default, skip_serializing_if = "Value::is_null")]
    pub properties: Value,

    /// Written back as a list; read from either a single ID or a list.
    #[serde(
        rename = "DependsOn",
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "string_or_list"
    )]
    pub depends_on: Vec<String>,

    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(rename = "DeletionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<String>,

    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<String>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Resource {
    pub fn new(resource_type: &str, properties: Value) -> Self {
        Resource {
            resource_type: resource_type.to_string(),
            properties,
            depends_on: Vec::new(),
            condition: None,
            deletion_policy: None,
            update_replace_policy: None,
            metadata: None,
        }
    }

    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        self.depends_on.push(logical_id.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: impl Into<String>) -> Self {
        self.deletion_policy = Some(policy.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

fn string_or_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(logical_id) => vec![logical_id],
        StringOrList::Many(logical_ids) => logical_ids,
    })
}

/// A generated resource type with its CloudFormation type name.
///
/// Wrapping into and unwrapping from the [`Resource`] envelope is provided;
/// implementors only name the type.
pub trait CloudFormationResource: Serialize + DeserializeOwned {
    /// e.g. `AWS::S3::Bucket`
    const AWS_TYPE: &'static str;

    fn aws_cloudformation_type(&self) -> &'static str {
        Self::AWS_TYPE
    }

    fn to_resource(&self) -> Result<Resource> {
        Ok(Resource::new(Self::AWS_TYPE, serde_json::to_value(self)?))
    }

    fn from_resource(logical_id: &str, resource: &Resource) -> Result<Self> {
        if resource.resource_type != Self::AWS_TYPE {
            return Err(Error::ResourceTypeMismatch {
                logical_id: logical_id.to_string(),
                expected: Self::AWS_TYPE.to_string(),
                found: resource.resource_type.clone(),
            });
        }
        let properties = match &resource.properties {
            Value::Null => Value::Object(Map::new()),
            properties => properties.clone(),
        };
        Ok(serde_json::from_value(properties)?)
    }
}
