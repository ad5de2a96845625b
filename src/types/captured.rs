use crate::builder::MAX_CAUSE_DEPTH;
use crate::traits::DescribableError;
use crate::types::{FrameVec, StackFrame};

/// An owned, uniform wrapper implementing [`DescribableError`].
///
/// For hosts that cannot (or do not want to) implement the trait on every
/// concrete error kind: capture the type name, message, frames, and cause
/// chain once, up front, and hand the wrapper to the builder.
///
/// # Examples
///
/// ```
/// use error_beacon::{CapturedError, DescribableError};
///
/// let err = CapturedError::new("ConnectionError", "connection refused")
///     .caused_by(CapturedError::new("DnsError", "lookup failed"));
///
/// assert_eq!(err.message(), "connection refused");
/// assert!(err.cause().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    type_name: String,
    message: String,
    frames: FrameVec,
    cause: Option<Box<CapturedError>>,
}

impl CapturedError {
    #[inline]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            frames: FrameVec::new(),
            cause: None,
        }
    }

    /// Attaches captured call-stack frames.
    #[inline]
    pub fn with_frames(mut self, frames: impl IntoIterator<Item = StackFrame>) -> Self {
        self.frames.extend(frames);
        self
    }

    /// Sets the immediate cause, replacing any previous one.
    #[inline]
    pub fn caused_by(mut self, cause: CapturedError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Captures a standard error and its `source()` chain.
    ///
    /// The outermost error keeps its concrete type name (module path
    /// stripped). Nested sources are only reachable as `dyn Error`, which
    /// erases their concrete types, so they are reported under the generic
    /// `Error` name. The walk stops at the same depth cap the builder
    /// enforces.
    pub fn from_std<E: std::error::Error>(error: &E) -> Self {
        let mut messages = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            if messages.len() + 1 >= MAX_CAUSE_DEPTH {
                break;
            }
            messages.push(cause.to_string());
            source = cause.source();
        }

        let mut chain = None;
        for message in messages.into_iter().rev() {
            chain = Some(Box::new(Self {
                type_name: "Error".to_string(),
                message,
                frames: FrameVec::new(),
                cause: chain,
            }));
        }

        Self {
            type_name: short_type_name::<E>().to_string(),
            message: error.to_string(),
            frames: FrameVec::new(),
            cause: chain,
        }
    }
}

impl DescribableError for CapturedError {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn stack_frames(&self) -> FrameVec {
        self.frames.clone()
    }

    fn cause(&self) -> Option<&dyn DescribableError> {
        self.cause.as_deref().map(|cause| cause as &dyn DescribableError)
    }
}

/// Last path segment of a type's full name.
fn short_type_name<E>() -> &'static str {
    let full = core::any::type_name::<E>();
    full.rsplit("::").next().unwrap_or(full)
}
