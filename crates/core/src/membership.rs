//! Membership application status rules.
//!
//! Applications start out `pending` and move to `approved` or `rejected`
//! only through an explicit admin review action. The review endpoint rejects
//! any value outside this set before touching the store.

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// Every status an application row may hold.
pub const RECOGNIZED_STATUSES: [&str; 3] = [STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

/// Validate an admin-submitted status value (case-sensitive).
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if RECOGNIZED_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unrecognized application status: {status}"
        )))
    }
}
