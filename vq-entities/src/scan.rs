use crate::{id::Id, time::Timestamp};

/// Audit entry for one lookup attempt of the admin scan simulator.
/// Written for successes and failures alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLog {
    pub id: Id,
    pub admin_user_id: Id,
    pub raw_input: String,
    /// Short machine-readable outcome, e.g. the simulated action or
    /// `NOT_FOUND`.
    pub outcome: String,
    /// The full JSON payload that was returned to the admin.
    pub response: String,
    pub elapsed_millis: u64,
    pub created_at: Timestamp,
}
