use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::intrinsics::Intrinsic;

/// A string that is either written literally or computed by CloudFormation.
///
/// Serializes untagged, so `Literal("x")` is `"x"` and an intrinsic is its
/// `{"Fn::Name": args}` object. No token round trip is needed.
///
/// Anything else found when reading a template, such as a `Fn::Join` over
/// nested functions or a `Fn::If`, is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CfnValue {
    Literal(String),
    Intrinsic(Box<Intrinsic>),
    Other(Value),
}

impl CfnValue {
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            CfnValue::Literal(s) => Some(s),
            CfnValue::Intrinsic(_) | CfnValue::Other(_) => None,
        }
    }
}

impl From<&str> for CfnValue {
    fn from(s: &str) -> Self {
        CfnValue::Literal(s.to_string())
    }
}

impl From<String> for CfnValue {
    fn from(s: String) -> Self {
        CfnValue::Literal(s)
    }
}

impl From<Intrinsic> for CfnValue {
    fn from(intrinsic: Intrinsic) -> Self {
        CfnValue::Intrinsic(Box::new(intrinsic))
    }
}
