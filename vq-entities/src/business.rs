use crate::{id::Id, time::Timestamp};

/// A vending-machine operator. The tenant that owns all other records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub id: Id,
    pub name: String,
    pub owner_email: String,
    pub created_at: Timestamp,
}
