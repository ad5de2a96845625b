//! Serializable report document types.
//!
//! Everything here maps one-to-one onto the error-tracking service's JSON
//! schema: field names are camelCase on the wire, struct field order is
//! fixed, and identical state always serializes to byte-identical JSON.

use smallvec::SmallVec;

pub mod captured;
pub mod descriptor;
pub mod document;
pub mod stack_frame;

pub use captured::CapturedError;
pub use descriptor::ErrorDescriptor;
pub use document::{ReportDetails, ReportDocument};
pub use stack_frame::StackFrame;

/// SmallVec-backed collection of call-stack frames.
///
/// Inline storage for up to 8 frames keeps shallow stacks off the heap.
pub type FrameVec = SmallVec<[StackFrame; 8]>;
