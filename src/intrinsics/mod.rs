//! CloudFormation intrinsic functions.
//!
//! Generated resource properties are plain strings, so a function call such
//! as `{"Ref": "MyBucket"}` cannot be stored in them directly. The
//! [`encoder`] functions smuggle the call through as a base64 token, and
//! [`resolve`] swaps those tokens back to JSON objects after the template
//! has been serialized. [`Intrinsic`] is the typed form of the same calls.

pub mod encoder;
mod function;
pub mod mappings;
mod resolver;

pub use function::Intrinsic;
pub use mappings::{is_supported_intrinsic, short_form_to_long};
pub use resolver::{resolve, resolve_token, resolve_value};
