use crate::{id::Id, time::Timestamp};

/// One additive entry in a user's coin ledger. Balances are derived by
/// summation and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinTransaction {
    pub id: Id,
    pub user_id: Id,
    pub amount: i64,
    pub reason: String,
    pub created_at: Timestamp,
}
