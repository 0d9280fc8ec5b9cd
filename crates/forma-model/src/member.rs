//! Typed member declarations.

use serde::{Deserialize, Serialize};

use crate::enums::MemberType;

/// A typed name pair attached to a window or control, emitted as a struct
/// field by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub member_type: MemberType,
}

impl Member {
    #[must_use]
    pub fn new(name: impl Into<String>, member_type: MemberType) -> Self {
        Self {
            name: name.into(),
            member_type,
        }
    }
}
