use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, trace};
use serde::Serialize;
use serde_json::{Map, Value};

use super::mappings::is_supported_intrinsic;
use crate::errors::Result;

/// Resolves every intrinsic token found anywhere in `value`.
///
/// The value is marshaled to JSON and read back as a generic object, so any
/// serializable template or resource works. Only the round trip can fail; a
/// top-level value that is not a JSON object is reported as an error.
///
/// # Returns
/// The resolved template tree, ready to be rendered
pub fn resolve<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    let bytes = serde_json::to_vec(value)?;
    let tree: Map<String, Value> = serde_json::from_slice(&bytes)?;
    Ok(resolve_value(Value::Object(tree)))
}

/// Recursively walks a JSON tree and replaces tokens with intrinsic objects.
///
/// Never fails: strings that are not tokens are returned untouched.
pub fn resolve_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, val)| (key, resolve_value(val)))
                .collect(),
        ),
        Value::Array(array) => Value::Array(array.into_iter().map(resolve_value).collect()),
        Value::String(s) => match resolve_token(&s) {
            Some(resolved) => resolved,
            None => Value::String(s),
        },
        // Numbers, bools, and null pass through unchanged
        _ => value,
    }
}

/// Decodes a single token into its `{"Fn::Name": args}` object.
///
/// Returns `None` if the string is not valid base64, does not decode to a
/// JSON object, has anything other than one key, or names an unsupported
/// function. The arguments are resolved as well, so tokens nested inside a
/// `Fn::Join` or `Fn::Select` list come back as objects.
pub fn resolve_token(token: &str) -> Option<Value> {
    let decoded = STANDARD.decode(token).ok()?;
    let object: Map<String, Value> = serde_json::from_slice(&decoded).ok()?;
    if object.len() != 1 {
        return None;
    }

    let (name, args) = object.into_iter().next()?;
    if !is_supported_intrinsic(&name) {
        debug!("Ignoring token for unsupported function {}", name);
        return None;
    }

    trace!("Resolved {} token", name);
    let mut resolved = Map::new();
    resolved.insert(name, resolve_value(args));
    Some(Value::Object(resolved))
}
