//! Names of the CloudFormation intrinsic functions this crate understands.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

pub const REF: &str = "Ref";
pub const FN_BASE64: &str = "Fn::Base64";
pub const FN_CIDR: &str = "Fn::Cidr";
pub const FN_FIND_IN_MAP: &str = "Fn::FindInMap";
pub const FN_GET_ATT: &str = "Fn::GetAtt";
pub const FN_GET_AZS: &str = "Fn::GetAZs";
pub const FN_IMPORT_VALUE: &str = "Fn::ImportValue";
pub const FN_JOIN: &str = "Fn::Join";
pub const FN_SELECT: &str = "Fn::Select";
pub const FN_SPLIT: &str = "Fn::Split";
pub const FN_SUB: &str = "Fn::Sub";
pub const FN_TRANSFORM: &str = "Fn::Transform";

lazy_static! {
    /// Function names the resolver is allowed to unwrap.
    pub static ref SUPPORTED_INTRINSICS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert(REF);
        set.insert(FN_BASE64);
        set.insert(FN_CIDR);
        set.insert(FN_FIND_IN_MAP);
        set.insert(FN_GET_ATT);
        set.insert(FN_GET_AZS);
        set.insert(FN_IMPORT_VALUE);
        set.insert(FN_JOIN);
        set.insert(FN_SELECT);
        set.insert(FN_SPLIT);
        set.insert(FN_SUB);
        set.insert(FN_TRANSFORM);
        set
    };
    static ref SHORT_FORM_TO_LONG_MAPPING: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Ref", REF);
        m.insert("Base64", FN_BASE64);
        m.insert("Cidr", FN_CIDR);
        m.insert("FindInMap", FN_FIND_IN_MAP);
        m.insert("GetAtt", FN_GET_ATT);
        m.insert("GetAZs", FN_GET_AZS);
        m.insert("ImportValue", FN_IMPORT_VALUE);
        m.insert("Join", FN_JOIN);
        m.insert("Select", FN_SELECT);
        m.insert("Split", FN_SPLIT);
        m.insert("Sub", FN_SUB);
        m.insert("Transform", FN_TRANSFORM);
        m
    };
}

pub fn is_supported_intrinsic(name: &str) -> bool {
    SUPPORTED_INTRINSICS.contains(name)
}

/// Maps `GetAtt` to `Fn::GetAtt` and so on. Long forms map to themselves.
pub fn short_form_to_long(name: &str) -> Option<&'static str> {
    SHORT_FORM_TO_LONG_MAPPING.get(name).copied().or_else(|| {
        SUPPORTED_INTRINSICS
            .iter()
            .find(|supported| **supported == name)
            .copied()
    })
}
