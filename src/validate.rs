//! Structural validation of decoded request payloads.
//!
//! Rules are pure functions over the decoded structure; there is no
//! per-request validator construction and no cross-field or business
//! rules. Each violation yields one message, and all messages for a
//! payload join into a single human-readable string.

use crate::db::models::StudentInput;
use crate::error::RollcallError;

/// `field <name> is required` when a required text field is empty.
pub fn required_text(field: &'static str, value: &str) -> Option<String> {
    value.is_empty().then(|| format!("field {field} is required"))
}

/// `field <name> is required` when a required integer is zero
/// (zero means "not provided" under zero-value decoding).
pub fn required_nonzero(field: &'static str, value: i64) -> Option<String> {
    (value == 0).then(|| format!("field {field} is required"))
}

impl StudentInput {
    /// Checks every required field; collects one message per offender.
    pub fn validate(&self) -> Result<(), RollcallError> {
        let messages: Vec<String> = [
            required_text("name", &self.name),
            required_text("email", &self.email),
            required_nonzero("age", self.age),
        ]
        .into_iter()
        .flatten()
        .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(RollcallError::Validation(messages.join(", ")))
        }
    }
}
