use serde::{Deserialize, Serialize};

/// Placeholder stored when a create request carries no usable message.
pub const DEFAULT_MESSAGE: &str = "Hello from the storefront test endpoint";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub id: i64,         // Assigned by the store, never reused
    pub message: String,
}
