use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::ErrorDescriptor;

/// The full report payload sent to the error-tracking service.
///
/// Field order is fixed, so identical state always serializes to
/// byte-identical JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    /// Occurrence time in the canonical wire format.
    pub occurred_on: String,
    pub details: ReportDetails,
}

/// The `details` section of a report.
///
/// Only `error` is owned by the core. The sibling slots belong to external
/// collaborators (client info, environment info, user info, tags): the core
/// reserves them, passes supplied values through verbatim, and never
/// interprets them. Unset slots are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub error: ErrorDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_custom_data: Option<Value>,
}
