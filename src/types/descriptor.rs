use serde::{Deserialize, Serialize};

use crate::traits::DescribableError;
use crate::types::FrameVec;

/// The serializable representation of one error in a cause chain.
///
/// Descriptors form a singly-linked chain through `inner_error`, outermost
/// error first, owned strictly top-down: the document owns the root, each
/// descriptor owns its inner error. No shared or back references.
///
/// `inner_error` serializes as an explicit `null` when absent, and
/// `stack_trace` as an empty array when no frames were captured — the
/// service schema expects both keys to always be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDescriptor {
    pub message: String,
    pub stack_trace: FrameVec,
    pub inner_error: Option<Box<ErrorDescriptor>>,
}

impl ErrorDescriptor {
    /// Describes a single error, without its causes.
    ///
    /// The message is always `"<TypeName>: <message>"`; an empty message
    /// text still yields the trailing `": "`.
    pub fn describe(error: &dyn DescribableError) -> Self {
        Self {
            message: format!("{}: {}", error.type_name(), error.message()),
            stack_trace: error.stack_frames(),
            inner_error: None,
        }
    }

    /// Number of descriptors in this chain, including `self`.
    pub fn chain_len(&self) -> usize {
        let mut len = 1;
        let mut cursor = self.inner_error.as_deref();
        while let Some(inner) = cursor {
            len += 1;
            cursor = inner.inner_error.as_deref();
        }
        len
    }
}
