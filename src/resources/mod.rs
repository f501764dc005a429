//! Generated resource and property types.
//!
//! Each struct maps one-to-one onto the CloudFormation schema. String fields
//! accept literal values or tokens from [`crate::intrinsics::encoder`].

pub mod lambda;
pub mod s3;
pub mod sns;
pub mod sqs;
mod tag;

pub use tag::Tag;
