use crate::id::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub id: Id,
    pub business_id: Id,
    pub name: String,
    pub location: Option<String>,
}
