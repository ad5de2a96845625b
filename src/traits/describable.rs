use crate::types::FrameVec;

/// An error value the report core can describe.
///
/// Replaces reflective class-name/message inspection with an explicit,
/// polymorphic capability: every error kind that should appear in a report
/// exposes its declared type name, its human-readable message, its captured
/// call-stack frames, and at most one immediate cause.
///
/// The trait is object-safe; the builder walks cause chains through
/// `&dyn DescribableError`. Implementations must return an acyclic cause
/// chain — the builder caps traversal depth defensively but does not
/// detect cycles.
///
/// # Examples
///
/// ```
/// use error_beacon::DescribableError;
///
/// struct TimeoutError {
///     message: String,
/// }
///
/// impl DescribableError for TimeoutError {
///     fn type_name(&self) -> &str {
///         "TimeoutError"
///     }
///
///     fn message(&self) -> String {
///         self.message.clone()
///     }
/// }
///
/// let err = TimeoutError { message: "request took 30s".into() };
/// assert_eq!(err.type_name(), "TimeoutError");
/// ```
pub trait DescribableError {
    /// Declared type name of the error, as it should appear in the report.
    fn type_name(&self) -> &str;

    /// Human-readable message text. May be empty.
    fn message(&self) -> String;

    /// Call-stack frames captured when the error occurred.
    ///
    /// Frames are opaque pass-through as far as the report core is
    /// concerned; zero frames is valid.
    fn stack_frames(&self) -> FrameVec {
        FrameVec::new()
    }

    /// The immediate cause of this error, if any.
    fn cause(&self) -> Option<&dyn DescribableError> {
        None
    }
}
