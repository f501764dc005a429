use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{json, Map, Value};

use super::mappings::*;
use crate::errors::{Error, Result};

/// A single CloudFormation intrinsic function call.
///
/// Serializes to the single-key object CloudFormation expects, e.g.
/// `Intrinsic::Ref("MyBucket")` becomes `{"Ref": "MyBucket"}`. Scalar
/// arguments are kept as strings, so `Fn::Select` is rendered as
/// `{"Fn::Select": ["0", [...]]}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Intrinsic {
    Ref(String),
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    ImportValue(String),
    Base64(String),
    Cidr {
        ip_block: String,
        count: String,
        cidr_bits: String,
    },
    FindInMap {
        map_name: String,
        top_level_key: String,
        second_level_key: String,
    },
    GetAZs(String),
    Join {
        delimiter: String,
        values: Vec<String>,
    },
    Select {
        index: String,
        list: Vec<String>,
    },
    Split {
        delimiter: String,
        source: String,
    },
    Sub(String),
    Transform {
        name: String,
        parameters: Map<String, Value>,
    },
}

impl Intrinsic {
    /// The long-form function name, used as the object key.
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => REF,
            Intrinsic::GetAtt { .. } => FN_GET_ATT,
            Intrinsic::ImportValue(_) => FN_IMPORT_VALUE,
            Intrinsic::Base64(_) => FN_BASE64,
            Intrinsic::Cidr { .. } => FN_CIDR,
            Intrinsic::FindInMap { .. } => FN_FIND_IN_MAP,
            Intrinsic::GetAZs(_) => FN_GET_AZS,
            Intrinsic::Join { .. } => FN_JOIN,
            Intrinsic::Select { .. } => FN_SELECT,
            Intrinsic::Split { .. } => FN_SPLIT,
            Intrinsic::Sub(_) => FN_SUB,
            Intrinsic::Transform { .. } => FN_TRANSFORM,
        }
    }

    pub fn arguments(&self) -> Value {
        match self {
            Intrinsic::Ref(value)
            | Intrinsic::ImportValue(value)
            | Intrinsic::Base64(value)
            | Intrinsic::GetAZs(value)
            | Intrinsic::Sub(value) => Value::String(value.clone()),
            Intrinsic::GetAtt {
                logical_id,
                attribute,
            } => json!([logical_id, attribute]),
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => json!([ip_block, count, cidr_bits]),
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => json!([map_name, top_level_key, second_level_key]),
            Intrinsic::Join { delimiter, values } => json!([delimiter, values]),
            Intrinsic::Select { index, list } => json!([index, list]),
            Intrinsic::Split { delimiter, source } => json!([delimiter, source]),
            Intrinsic::Transform { name, parameters } => {
                json!({ "Name": name, "Parameters": parameters })
            }
        }
    }

    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert(self.name().to_string(), self.arguments());
        Value::Object(object)
    }

    /// Base64 of the JSON object, suitable for any plain string field.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_json().to_string())
    }

    /// Builds a typed intrinsic from a `{"Fn::Name": args}` object.
    ///
    /// Unlike the resolver this is strict: anything that is not exactly one
    /// supported function with well-formed arguments is an error.
    pub fn from_object(object: &Map<String, Value>) -> Result<Intrinsic> {
        let mut entries = object.iter();
        let (name, args) = match (entries.next(), entries.next()) {
            (Some(entry), None) => entry,
            _ => {
                return Err(Error::InvalidIntrinsic(format!(
                    "expected exactly one key, found {}",
                    object.len()
                )))
            }
        };
        let malformed = || Error::InvalidIntrinsic(format!("malformed {} arguments: {}", name, args));

        let intrinsic = match name.as_str() {
            REF => Intrinsic::Ref(scalar(args).ok_or_else(malformed)?),
            FN_IMPORT_VALUE => Intrinsic::ImportValue(scalar(args).ok_or_else(malformed)?),
            FN_BASE64 => Intrinsic::Base64(scalar(args).ok_or_else(malformed)?),
            FN_GET_AZS => Intrinsic::GetAZs(scalar(args).ok_or_else(malformed)?),
            FN_SUB => Intrinsic::Sub(scalar(args).ok_or_else(malformed)?),
            FN_GET_ATT => {
                let (logical_id, attribute) = match args {
                    // Short "Logical.Attribute" form
                    Value::String(dotted) => dotted
                        .split_once('.')
                        .map(|(id, attr)| (id.to_string(), attr.to_string())),
                    _ => fixed::<2>(args).map(|[id, attr]| (id, attr)),
                }
                .ok_or_else(malformed)?;
                Intrinsic::GetAtt {
                    logical_id,
                    attribute,
                }
            }
            FN_CIDR => {
                let [ip_block, count, cidr_bits] = fixed::<3>(args).ok_or_else(malformed)?;
                Intrinsic::Cidr {
                    ip_block,
                    count,
                    cidr_bits,
                }
            }
            FN_FIND_IN_MAP => {
                let [map_name, top_level_key, second_level_key] =
                    fixed::<3>(args).ok_or_else(malformed)?;
                Intrinsic::FindInMap {
                    map_name,
                    top_level_key,
                    second_level_key,
                }
            }
            FN_JOIN => {
                let (delimiter, values) = scalar_and_list(args).ok_or_else(malformed)?;
                Intrinsic::Join { delimiter, values }
            }
            FN_SELECT => {
                let (index, list) = scalar_and_list(args).ok_or_else(malformed)?;
                Intrinsic::Select { index, list }
            }
            FN_SPLIT => {
                let [delimiter, source] = fixed::<2>(args).ok_or_else(malformed)?;
                Intrinsic::Split { delimiter, source }
            }
            FN_TRANSFORM => {
                let object = args.as_object().ok_or_else(malformed)?;
                let name = object
                    .get("Name")
                    .and_then(Value::as_str)
                    .ok_or_else(malformed)?
                    .to_string();
                let parameters = match object.get("Parameters") {
                    Some(Value::Object(parameters)) => parameters.clone(),
                    None => Map::new(),
                    Some(_) => return Err(malformed()),
                };
                Intrinsic::Transform { name, parameters }
            }
            other => {
                return Err(Error::InvalidIntrinsic(format!(
                    "unsupported function {}",
                    other
                )))
            }
        };
        Ok(intrinsic)
    }
}

/// Strings pass through; numbers are accepted and kept in their string form.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalars(value: &Value) -> Option<Vec<String>> {
    value.as_array()?.iter().map(scalar).collect()
}

fn fixed<const N: usize>(value: &Value) -> Option<[String; N]> {
    scalars(value)?.try_into().ok()
}

fn scalar_and_list(value: &Value) -> Option<(String, Vec<String>)> {
    match value.as_array()?.as_slice() {
        [head, list] => Some((scalar(head)?, scalars(list)?)),
        _ => None,
    }
}

impl Serialize for Intrinsic {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.name(), &self.arguments())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Intrinsic::from_object(&object).map_err(de::Error::custom)
    }
}
