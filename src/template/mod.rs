mod resource;
mod sections;

pub use resource::{CloudFormationResource, Resource};
pub use sections::{Export, Output, Parameter};

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Error, Result};
use crate::intrinsics::resolve;

pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

/// A CloudFormation template. Every section keeps insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub aws_template_format_version: Option<String>,

    /// A single macro name or a list of them.
    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Value>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, Value>,

    #[serde(rename = "Parameters", default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,

    #[serde(rename = "Mappings", default, skip_serializing_if = "IndexMap::is_empty")]
    pub mappings: IndexMap<String, Value>,

    #[serde(rename = "Conditions", default, skip_serializing_if = "IndexMap::is_empty")]
    pub conditions: IndexMap<String, Value>,

    #[serde(rename = "Resources", default)]
    pub resources: IndexMap<String, Resource>,

    #[serde(rename = "Outputs", default, skip_serializing_if = "IndexMap::is_empty")]
    pub outputs: IndexMap<String, Output>,
}

impl Template {
    pub fn new() -> Self {
        Template {
            aws_template_format_version: Some(DEFAULT_FORMAT_VERSION.to_string()),
            ..Default::default()
        }
    }

    /// Wraps `resource` in its envelope and stores it under `logical_id`,
    /// replacing any resource already there.
    pub fn add_resource<T: CloudFormationResource>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &T,
    ) -> Result<()> {
        let logical_id = logical_id.into();
        debug!("Adding {} resource {}", T::AWS_TYPE, logical_id);
        self.resources.insert(logical_id, resource.to_resource()?);
        Ok(())
    }

    /// Returns every resource of type `T`, keyed by logical ID.
    pub fn get_all_resources<T: CloudFormationResource>(&self) -> Result<IndexMap<String, T>> {
        let mut found = IndexMap::new();
        for (logical_id, resource) in &self.resources {
            if resource.resource_type == T::AWS_TYPE {
                found.insert(logical_id.clone(), T::from_resource(logical_id, resource)?);
            }
        }
        debug!("Found {} {} resources", found.len(), T::AWS_TYPE);
        Ok(found)
    }

    /// Looks up a single resource of type `T` by logical ID.
    pub fn get_resource_with_name<T: CloudFormationResource>(&self, logical_id: &str) -> Result<T> {
        let resource = self
            .resources
            .get(logical_id)
            .ok_or_else(|| Error::ResourceNotFound(logical_id.to_string()))?;
        T::from_resource(logical_id, resource)
    }

    /// The template with every intrinsic token resolved.
    pub fn resolved(&self) -> Result<Value> {
        resolve(self)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.resolved()?)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yml::to_string(&self.resolved()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsics::encoder::{get_att, ref_};
    use crate::intrinsics::Intrinsic;
    use crate::value::CfnValue;
    use crate::resources::{s3, sqs};
    use serde_json::json;

    fn sample_template() -> Template {
        let mut template = Template::new();
        template
            .add_resource(
                "Uploads",
                &s3::Bucket {
                    bucket_name: Some("uploads".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        template
            .add_resource(
                "Jobs",
                &sqs::Queue {
                    queue_name: Some(ref_("QueueName")),
                    ..Default::default()
                },
            )
            .unwrap();
        template
            .add_resource(
                "Archive",
                &s3::Bucket {
                    bucket_name: Some("archive".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        template
    }

    #[test]
    fn test_new_sets_format_version() {
        let template = Template::new();
        assert_eq!(
            template.aws_template_format_version.as_deref(),
            Some(DEFAULT_FORMAT_VERSION)
        );
    }

    #[test]
    fn test_get_all_resources_filters_by_type() {
        let template = sample_template();
        let buckets = template.get_all_resources::<s3::Bucket>().unwrap();
        assert_eq!(
            buckets.keys().collect::<Vec<_>>(),
            vec!["Uploads", "Archive"]
        );
        assert_eq!(buckets["Archive"].bucket_name.as_deref(), Some("archive"));

        let queues = template.get_all_resources::<sqs::Queue>().unwrap();
        assert_eq!(queues.len(), 1);
    }

    #[test]
    fn test_get_resource_with_name() {
        let template = sample_template();
        let queue: sqs::Queue = template.get_resource_with_name("Jobs").unwrap();
        assert_eq!(queue.queue_name, Some(ref_("QueueName")));

        assert!(matches!(
            template.get_resource_with_name::<sqs::Queue>("Missing"),
            Err(Error::ResourceNotFound(_))
        ));
        assert!(matches!(
            template.get_resource_with_name::<sqs::Queue>("Uploads"),
            Err(Error::ResourceTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_resolved_replaces_tokens() {
        let mut template = sample_template();
        template
            .outputs
            .insert("JobsArn".into(), Output::new(get_att("Jobs", "Arn")));

        let resolved = template.resolved().unwrap();
        assert_eq!(
            resolved["Resources"]["Jobs"],
            json!({
                "Type": "AWS::SQS::Queue",
                "Properties": { "QueueName": { "Ref": "QueueName" } }
            })
        );
        assert_eq!(
            resolved["Outputs"]["JobsArn"]["Value"],
            json!({ "Fn::GetAtt": ["Jobs", "Arn"] })
        );
        assert_eq!(resolved["AWSTemplateFormatVersion"], json!("2010-09-09"));
    }

    #[test]
    fn test_render_keeps_section_order() {
        let json = sample_template().to_json().unwrap();
        let uploads = json.find("\"Uploads\"").unwrap();
        let jobs = json.find("\"Jobs\"").unwrap();
        let archive = json.find("\"Archive\"").unwrap();
        assert!(uploads < jobs && jobs < archive);
    }

    #[test]
    fn test_to_yaml() {
        let yaml = sample_template().to_yaml().unwrap();
        assert!(yaml.contains("AWS::SQS::Queue"));
        assert!(yaml.contains("Ref: QueueName"));
    }

    #[test]
    fn test_parse_existing_template() {
        let template: Template = serde_json::from_value(json!({
            "Resources": {
                "Topic": { "Type": "AWS::SNS::Topic", "Properties": { "TopicName": "alerts" } }
            },
            "Outputs": {
                "TopicArn": { "Value": { "Ref": "Topic" } }
            }
        }))
        .unwrap();

        assert_eq!(template.aws_template_format_version, None);
        assert_eq!(template.resources["Topic"].resource_type, "AWS::SNS::Topic");
        assert_eq!(
            template.outputs["TopicArn"].value,
            CfnValue::from(Intrinsic::Ref("Topic".into()))
        );
    }

    #[test]
    fn test_parse_nested_outputs_and_single_depends_on() {
        let template: Template = serde_json::from_value(json!({
            "Resources": {
                "Topic": { "Type": "AWS::SNS::Topic", "DependsOn": "Queue" },
                "Queue": { "Type": "AWS::SQS::Queue" }
            },
            "Outputs": {
                "Arn": {
                    "Value": { "Fn::Join": ["", ["arn:", { "Ref": "AWS::Region" }]] }
                },
                "Mode": {
                    "Value": { "Fn::If": ["IsProd", "prod", "dev"] }
                }
            }
        }))
        .unwrap();

        assert_eq!(template.resources["Topic"].depends_on, vec!["Queue".to_string()]);
        assert_eq!(
            template.outputs["Arn"].value,
            CfnValue::Other(json!({ "Fn::Join": ["", ["arn:", { "Ref": "AWS::Region" }]] }))
        );
        assert_eq!(
            template.resolved().unwrap()["Outputs"]["Mode"]["Value"],
            json!({ "Fn::If": ["IsProd", "prod", "dev"] })
        );
    }

    #[test]
    fn test_rendered_json_parses_back() {
        let mut template = sample_template();
        template
            .outputs
            .insert("JobsArn".into(), Output::new(get_att("Jobs", "Arn")));

        let parsed: Template = serde_json::from_str(&template.to_json().unwrap()).unwrap();
        assert_eq!(parsed.resolved().unwrap(), template.resolved().unwrap());
    }
}
