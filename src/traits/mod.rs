//! Core traits for describing host errors.
//!
//! - [`DescribableError`]: the capability every error must expose before it
//!   reaches the [`MessageBuilder`](crate::MessageBuilder) — type name,
//!   message, call-stack frames, and an optional immediate cause.
//!
//! Host errors that cannot implement the trait per concrete kind can be
//! wrapped uniformly with [`CapturedError`](crate::CapturedError) instead.

pub mod describable;

pub use describable::DescribableError;
