//! Report assembly: cause-chain traversal and document serialization.

use serde_json::Value;

use crate::error::ReportError;
use crate::timestamp::Timestamp;
use crate::traits::DescribableError;
use crate::types::{ErrorDescriptor, ReportDetails, ReportDocument};

/// Maximum number of descriptors produced from one cause chain.
///
/// A chain deeper than this is truncated, not failed: the last descriptor
/// within the cap keeps its `inner_error` unset. Guards against unbounded
/// or cyclic-by-bug chains the host runtime should never produce.
pub const MAX_CAUSE_DEPTH: usize = 20;

/// Builds one report for one error.
///
/// A builder moves through two states: `Empty` (fresh, occurrence time
/// already captured) and `Built` (after [`build`](MessageBuilder::build)).
/// `build` is single-use per instance; [`serialize`](MessageBuilder::serialize)
/// requires `Built` and may be called any number of times, always returning
/// byte-identical output for the same state. Builders are not reused across
/// distinct errors and share no mutable state, so concurrent report
/// generation just uses one builder per error.
///
/// # Examples
///
/// ```
/// use error_beacon::{CapturedError, MessageBuilder};
///
/// let mut builder = MessageBuilder::at_epoch(0)?;
/// builder.build(&CapturedError::new("Exception", "test"))?;
///
/// let json = builder.serialize()?;
/// assert!(json.starts_with(r#"{"occurredOn":"1970-01-01T00:00:00Z""#));
/// assert!(json.contains(r#""message":"Exception: test""#));
/// # Ok::<(), error_beacon::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    occurred_on: String,
    error: Option<ErrorDescriptor>,
    truncated: bool,
    machine_name: Option<Value>,
    client: Option<Value>,
    environment: Option<Value>,
    user: Option<Value>,
    tags: Option<Value>,
    user_custom_data: Option<Value>,
}

impl MessageBuilder {
    /// Creates a builder stamped with the current UTC time.
    ///
    /// The clock is sampled exactly once, here; the stored occurrence time
    /// never changes afterwards.
    pub fn new() -> Self {
        Self::with_timestamp(Timestamp::now())
    }

    /// Creates a builder stamped with an explicit epoch-seconds instant.
    ///
    /// Fails with [`ReportError::Formatting`] for unrepresentable instants.
    pub fn at_epoch(secs: i64) -> Result<Self, ReportError> {
        Ok(Self::with_timestamp(Timestamp::from_epoch(secs)?))
    }

    /// Creates a builder stamped with a pre-built [`Timestamp`].
    pub fn with_timestamp(timestamp: Timestamp) -> Self {
        Self {
            occurred_on: timestamp.to_wire(),
            error: None,
            truncated: false,
            machine_name: None,
            client: None,
            environment: None,
            user: None,
            tags: None,
            user_custom_data: None,
        }
    }

    /// The stored occurrence time in wire format.
    #[inline]
    pub fn occurred_on(&self) -> &str {
        &self.occurred_on
    }

    /// Whether [`build`](MessageBuilder::build) truncated the cause chain
    /// at [`MAX_CAUSE_DEPTH`].
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// Walks the error's cause chain into the report's descriptor tree.
    ///
    /// Single-use: fails with [`ReportError::InvalidState`] if the report
    /// is already built, leaving the built state untouched. Chains deeper
    /// than [`MAX_CAUSE_DEPTH`] are truncated and the condition recorded,
    /// never failed.
    pub fn build(&mut self, error: &dyn DescribableError) -> Result<(), ReportError> {
        if self.error.is_some() {
            return Err(ReportError::InvalidState {
                reason: "build may only run once per report",
            });
        }

        // Iterative walk, outermost first, with an explicit depth bound.
        let mut chain = vec![ErrorDescriptor::describe(error)];
        let mut next = error.cause();
        while let Some(cause) = next {
            if chain.len() >= MAX_CAUSE_DEPTH {
                self.truncated = true;
                #[cfg(feature = "tracing")]
                tracing::warn!(cap = MAX_CAUSE_DEPTH, "cause chain truncated at depth cap");
                break;
            }
            chain.push(ErrorDescriptor::describe(cause));
            next = cause.cause();
        }

        let mut root = None;
        for mut descriptor in chain.into_iter().rev() {
            descriptor.inner_error = root.map(Box::new);
            root = Some(descriptor);
        }
        self.error = root;
        Ok(())
    }

    /// Assembles the full document from built state.
    ///
    /// Fails with [`ReportError::InvalidState`] before
    /// [`build`](MessageBuilder::build) has run.
    pub fn document(&self) -> Result<ReportDocument, ReportError> {
        let error = self.error.clone().ok_or(ReportError::InvalidState {
            reason: "serialize requires a built report",
        })?;
        Ok(ReportDocument {
            occurred_on: self.occurred_on.clone(),
            details: ReportDetails {
                error,
                machine_name: self.machine_name.clone(),
                client: self.client.clone(),
                environment: self.environment.clone(),
                user: self.user.clone(),
                tags: self.tags.clone(),
                user_custom_data: self.user_custom_data.clone(),
            },
        })
    }

    /// Serializes the report to its JSON wire form.
    ///
    /// Deterministic and idempotent: field order is fixed by the document
    /// types, and repeated calls on the same built state return identical
    /// strings.
    pub fn serialize(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(&self.document()?)?)
    }

    /// Sets the opaque `machineName` detail slot, passed through verbatim.
    #[inline]
    pub fn set_machine_name(&mut self, value: Value) {
        self.machine_name = Some(value);
    }

    /// Sets the opaque `client` detail slot, passed through verbatim.
    #[inline]
    pub fn set_client(&mut self, value: Value) {
        self.client = Some(value);
    }

    /// Sets the opaque `environment` detail slot, passed through verbatim.
    #[inline]
    pub fn set_environment(&mut self, value: Value) {
        self.environment = Some(value);
    }

    /// Sets the opaque `user` detail slot, passed through verbatim.
    #[inline]
    pub fn set_user(&mut self, value: Value) {
        self.user = Some(value);
    }

    /// Sets the opaque `tags` detail slot, passed through verbatim.
    #[inline]
    pub fn set_tags(&mut self, value: Value) {
        self.tags = Some(value);
    }

    /// Sets the opaque `userCustomData` detail slot, passed through verbatim.
    #[inline]
    pub fn set_user_custom_data(&mut self, value: Value) {
        self.user_custom_data = Some(value);
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}
