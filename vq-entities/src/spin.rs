use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinWheel {
    pub id: Id,
    pub business_id: Id,
    pub name: String,
}

/// Audit record of a spin outcome. Written server-side *before* the
/// winning reward is revealed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinResult {
    pub id: Id,
    pub wheel_id: Id,
    pub reward_id: Id,
    pub user_ip: String,
    pub created_at: Timestamp,
}
