use serde::{Deserialize, Serialize};

/// One call-stack frame of an error descriptor.
///
/// The core treats frames as opaque pass-through: they are captured by a
/// collaborator (or the host runtime) and serialized untouched. The field
/// set matches the service schema's frame shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    pub line_number: u32,
    pub class_name: String,
    pub file_name: String,
    pub method_name: String,
}

impl StackFrame {
    #[inline]
    pub fn new(
        file_name: impl Into<String>,
        line_number: u32,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            class_name: class_name.into(),
            file_name: file_name.into(),
            method_name: method_name.into(),
        }
    }
}
