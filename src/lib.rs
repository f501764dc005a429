//! Build CloudFormation templates from typed resources whose string fields
//! may carry intrinsic function calls.
//!
//! ```
//! use cfn_intrinsics::intrinsics::encoder::get_att;
//! use cfn_intrinsics::resources::sqs;
//! use cfn_intrinsics::template::Template;
//!
//! let mut template = Template::new();
//! template.add_resource("DeadLetters", &sqs::Queue::default()).unwrap();
//! template
//!     .add_resource(
//!         "Jobs",
//!         &sqs::Queue {
//!             redrive_policy: Some(sqs::RedrivePolicy {
//!                 dead_letter_target_arn: get_att("DeadLetters", "Arn"),
//!                 max_receive_count: 3,
//!             }),
//!             ..Default::default()
//!         },
//!     )
//!     .unwrap();
//!
//! let resolved = template.resolved().unwrap();
//! assert_eq!(
//!     resolved["Resources"]["Jobs"]["Properties"]["RedrivePolicy"]["deadLetterTargetArn"],
//!     serde_json::json!({ "Fn::GetAtt": ["DeadLetters", "Arn"] })
//! );
//! ```

pub mod errors;
pub mod intrinsics;
pub mod render;
pub mod resources;
pub mod template;
pub mod value;

pub use errors::{Error, Result};
pub use intrinsics::{resolve, Intrinsic};
pub use template::Template;
pub use value::CfnValue;
