use cfn_intrinsics::intrinsics::encoder::{get_att, get_azs, join, ref_, select, sub};
use cfn_intrinsics::render::{resolve_file, OutputFormat};
use cfn_intrinsics::resources::{lambda, s3, sns, sqs, Tag};
use cfn_intrinsics::template::{Output, Parameter, Template};
use cfn_intrinsics::{CfnValue, Intrinsic};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;

fn build_template() -> Template {
    let mut template = Template::new();
    template.description = Some("Queue fan-out".into());
    template
        .parameters
        .insert("Stage".into(), Parameter::new("String"));

    template
        .add_resource(
            "Artifacts",
            &s3::Bucket {
                bucket_name: Some(sub("${AWS::StackName}-artifacts")),
                tags: vec![Tag::new("Stage", ref_("Stage"))],
                ..Default::default()
            },
        )
        .unwrap();
    template
        .add_resource("DeadLetters", &sqs::Queue::default())
        .unwrap();
    template
        .add_resource(
            "Jobs",
            &sqs::Queue {
                visibility_timeout: Some(60),
                redrive_policy: Some(sqs::RedrivePolicy {
                    dead_letter_target_arn: get_att("DeadLetters", "Arn"),
                    max_receive_count: 5,
                }),
                ..Default::default()
            },
        )
        .unwrap();
    template
        .add_resource(
            "Alerts",
            &sns::Topic {
                subscription: vec![sns::Subscription {
                    endpoint: get_att("Jobs", "Arn"),
                    protocol: "sqs".into(),
                }],
                ..Default::default()
            },
        )
        .unwrap();
    template
        .add_resource(
            "Worker",
            &lambda::Function {
                code: lambda::Code {
                    s3_bucket: Some(ref_("Artifacts")),
                    s3_key: Some(join("/", &[ref_("Stage"), "worker.zip".to_string()])),
                    ..Default::default()
                },
                role: get_att("WorkerRole", "Arn"),
                ..Default::default()
            },
        )
        .unwrap();

    template.outputs.insert(
        "JobsUrl".into(),
        Output::new(Intrinsic::Ref("Jobs".into()))
            .exported_as(CfnValue::from(sub("${AWS::StackName}-JobsUrl"))),
    );
    template.outputs.insert(
        "FirstZone".into(),
        Output::new(select("0", &[get_azs("")])),
    );
    template
}

#[test]
fn resolves_full_template() {
    let resolved = build_template().resolved().unwrap();

    assert_eq!(
        resolved,
        json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Description": "Queue fan-out",
            "Parameters": { "Stage": { "Type": "String" } },
            "Resources": {
                "Artifacts": {
                    "Type": "AWS::S3::Bucket",
                    "Properties": {
                        "BucketName": { "Fn::Sub": "${AWS::StackName}-artifacts" },
                        "Tags": [{ "Key": "Stage", "Value": { "Ref": "Stage" } }]
                    }
                },
                "DeadLetters": { "Type": "AWS::SQS::Queue", "Properties": {} },
                "Jobs": {
                    "Type": "AWS::SQS::Queue",
                    "Properties": {
                        "RedrivePolicy": {
                            "deadLetterTargetArn": { "Fn::GetAtt": ["DeadLetters", "Arn"] },
                            "maxReceiveCount": 5
                        },
                        "VisibilityTimeout": 60
                    }
                },
                "Alerts": {
                    "Type": "AWS::SNS::Topic",
                    "Properties": {
                        "Subscription": [{
                            "Endpoint": { "Fn::GetAtt": ["Jobs", "Arn"] },
                            "Protocol": "sqs"
                        }]
                    }
                },
                "Worker": {
                    "Type": "AWS::Lambda::Function",
                    "Properties": {
                        "Code": {
                            "S3Bucket": { "Ref": "Artifacts" },
                            "S3Key": { "Fn::Join": ["/", [{ "Ref": "Stage" }, "worker.zip"]] }
                        },
                        "Role": { "Fn::GetAtt": ["WorkerRole", "Arn"] }
                    }
                }
            },
            "Outputs": {
                "JobsUrl": {
                    "Value": { "Ref": "Jobs" },
                    "Export": { "Name": { "Fn::Sub": "${AWS::StackName}-JobsUrl" } }
                },
                "FirstZone": {
                    "Value": { "Fn::Select": ["0", [{ "Fn::GetAZs": "" }]] }
                }
            }
        })
    );
}

#[test]
fn rendered_template_parses_back() {
    let template = build_template();
    let parsed: Template = serde_json::from_str(&template.to_json().unwrap()).unwrap();

    assert_eq!(
        parsed.outputs["FirstZone"].value,
        CfnValue::Other(json!({ "Fn::Select": ["0", [{ "Fn::GetAZs": "" }]] }))
    );
    assert_eq!(
        parsed.outputs["JobsUrl"].value,
        CfnValue::from(Intrinsic::Ref("Jobs".into()))
    );
    assert_eq!(parsed.resolved().unwrap(), template.resolved().unwrap());
}

#[test]
fn typed_lookups_see_unresolved_tokens() {
    let template = build_template();
    let queues = template.get_all_resources::<sqs::Queue>().unwrap();
    assert_eq!(queues.len(), 2);
    assert_eq!(
        queues["Jobs"]
            .redrive_policy
            .as_ref()
            .map(|p| p.dead_letter_target_arn.clone()),
        Some(get_att("DeadLetters", "Arn"))
    );

    let worker: lambda::Function = template.get_resource_with_name("Worker").unwrap();
    assert_eq!(worker.role, get_att("WorkerRole", "Arn"));
}

#[test]
fn resolves_template_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("template.json");
    let output = dir.path().join("resolved.json");

    let unresolved = serde_json::to_string(&build_template()).unwrap();
    fs::write(&input, unresolved).unwrap();

    resolve_file(&input, &output, OutputFormat::Json).unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, build_template().resolved().unwrap());
}

#[test]
fn resolves_template_file_to_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("template.json");
    let output = dir.path().join("resolved.yaml");

    fs::write(&input, json!({ "Resources": { "Q": { "Type": "AWS::SQS::Queue", "Properties": { "QueueName": ref_("Name") } } } }).to_string()).unwrap();
    resolve_file(&input, &output, OutputFormat::Yaml).unwrap();

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("Ref: Name"));
    assert!(!yaml.contains(&ref_("Name")));
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = resolve_file(
        &dir.path().join("missing.json"),
        &dir.path().join("out.json"),
        OutputFormat::Json,
    );
    assert!(matches!(result, Err(cfn_intrinsics::Error::Io(_))));
}
