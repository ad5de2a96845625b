//! Convenience re-exports for quick starts.
//!
//! ```
//! use error_beacon::prelude::*;
//!
//! let mut builder = MessageBuilder::at_epoch(0)?;
//! builder.build(&CapturedError::new("Exception", "test"))?;
//! let _json = builder.serialize()?;
//! # Ok::<(), ReportError>(())
//! ```

pub use crate::builder::{MessageBuilder, MAX_CAUSE_DEPTH};
pub use crate::error::ReportError;
pub use crate::timestamp::Timestamp;
pub use crate::traits::DescribableError;
pub use crate::types::{CapturedError, ErrorDescriptor, FrameVec, StackFrame};
