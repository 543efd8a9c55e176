use crate::id::Id;

/// A catalog of items that can be voted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingList {
    pub id: Id,
    pub business_id: Id,
    pub name: String,
}

/// A single product on a voting list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: Id,
    pub list_id: Id,
    pub name: String,
    pub category: Option<String>,
    pub retail_price_cents: i64,
    pub inventory: i64,
}
