//! Builds structured error reports for an error-tracking service.
//!
//! The crate covers the report *core* only: it normalizes an occurrence
//! time to the service's canonical wire format, walks an error's cause
//! chain into a bounded tree of descriptors, and serializes the whole
//! document deterministically against the service's JSON schema. Transport,
//! API keys, and environment collection belong to external collaborators —
//! the core only reserves pass-through slots for what they supply.
//!
//! # Examples
//!
//! ## Reporting a described error
//!
//! ```
//! use error_beacon::{CapturedError, MessageBuilder};
//!
//! let outer = CapturedError::new("Exception", "outer")
//!     .caused_by(CapturedError::new("Exception", "inner"));
//!
//! let mut builder = MessageBuilder::at_epoch(0)?;
//! builder.build(&outer)?;
//!
//! let json = builder.serialize()?;
//! assert!(json.contains(r#""message":"Exception: outer""#));
//! assert!(json.contains(r#""message":"Exception: inner""#));
//! # Ok::<(), error_beacon::ReportError>(())
//! ```
//!
//! ## Adapting a standard error
//!
//! ```
//! use error_beacon::{CapturedError, MessageBuilder};
//!
//! let io_err = std::io::Error::other("disk offline");
//!
//! let mut builder = MessageBuilder::new();
//! builder.build(&CapturedError::from_std(&io_err))?;
//!
//! assert!(builder.serialize()?.contains("disk offline"));
//! # Ok::<(), error_beacon::ReportError>(())
//! ```

/// Report assembly and cause-chain traversal
pub mod builder;
/// Error taxonomy for report generation
pub mod error;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Canonical wire timestamps
pub mod timestamp;
/// Core traits for describing host errors
pub mod traits;
/// Serializable report document types
pub mod types;

pub use builder::{MessageBuilder, MAX_CAUSE_DEPTH};
pub use error::ReportError;
pub use timestamp::Timestamp;
pub use traits::DescribableError;
pub use types::{
    CapturedError, ErrorDescriptor, FrameVec, ReportDetails, ReportDocument, StackFrame,
};
