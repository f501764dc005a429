//! Token constructors, one per intrinsic function.
//!
//! Each function returns the base64 encoding of the intrinsic's JSON object.
//! The token is an ordinary string, so it can be stored in any string-typed
//! resource property and is turned back into the object by
//! [`resolve`](super::resolve) once the template is rendered. Arguments are
//! JSON-escaped, so quotes and backslashes are safe to pass.

use serde_json::{Map, Value};

use super::Intrinsic;

/// `{"Ref": "<logical_name>"}`
pub fn ref_(logical_name: &str) -> String {
    Intrinsic::Ref(logical_name.to_string()).encode()
}

/// `{"Fn::GetAtt": ["<logical_name>", "<attribute>"]}`
pub fn get_att(logical_name: &str, attribute: &str) -> String {
    Intrinsic::GetAtt {
        logical_id: logical_name.to_string(),
        attribute: attribute.to_string(),
    }
    .encode()
}

/// `{"Fn::ImportValue": "<name>"}`
pub fn import_value(name: &str) -> String {
    Intrinsic::ImportValue(name.to_string()).encode()
}

/// `{"Fn::Base64": "<input>"}`
pub fn base64(input: &str) -> String {
    Intrinsic::Base64(input.to_string()).encode()
}

/// `{"Fn::Cidr": ["<ip_block>", "<count>", "<cidr_bits>"]}`
pub fn cidr(ip_block: &str, count: &str, cidr_bits: &str) -> String {
    Intrinsic::Cidr {
        ip_block: ip_block.to_string(),
        count: count.to_string(),
        cidr_bits: cidr_bits.to_string(),
    }
    .encode()
}

/// `{"Fn::FindInMap": ["<map_name>", "<top_level_key>", "<second_level_key>"]}`
pub fn find_in_map(map_name: &str, top_level_key: &str, second_level_key: &str) -> String {
    Intrinsic::FindInMap {
        map_name: map_name.to_string(),
        top_level_key: top_level_key.to_string(),
        second_level_key: second_level_key.to_string(),
    }
    .encode()
}

/// `{"Fn::GetAZs": "<region>"}`. An empty region means the stack's region.
pub fn get_azs(region: &str) -> String {
    Intrinsic::GetAZs(region.to_string()).encode()
}

/// `{"Fn::Join": ["<delimiter>", [values...]]}`
///
/// Values may themselves be tokens; they are resolved along with the join.
pub fn join<S: AsRef<str>>(delimiter: &str, values: &[S]) -> String {
    Intrinsic::Join {
        delimiter: delimiter.to_string(),
        values: to_strings(values),
    }
    .encode()
}

/// `{"Fn::Select": ["<index>", [list...]]}`
pub fn select<S: AsRef<str>>(index: &str, list: &[S]) -> String {
    Intrinsic::Select {
        index: index.to_string(),
        list: to_strings(list),
    }
    .encode()
}

/// `{"Fn::Split": ["<delimiter>", "<source>"]}`
pub fn split(delimiter: &str, source: &str) -> String {
    Intrinsic::Split {
        delimiter: delimiter.to_string(),
        source: source.to_string(),
    }
    .encode()
}

/// `{"Fn::Sub": "<template>"}`
pub fn sub(template: &str) -> String {
    Intrinsic::Sub(template.to_string()).encode()
}

/// `{"Fn::Transform": {"Name": "<name>", "Parameters": {...}}}`
pub fn transform(name: &str, parameters: Map<String, Value>) -> String {
    Intrinsic::Transform {
        name: name.to_string(),
        parameters,
    }
    .encode()
}

fn to_strings<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}
