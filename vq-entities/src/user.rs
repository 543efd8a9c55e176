use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::id::Id;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Guest,
    User,
    Business,
    Admin,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid role")]
pub struct RoleParseError;

impl Role {
    pub fn parse(s: &str) -> Result<Self, RoleParseError> {
        Self::from_str(s).map_err(|_| RoleParseError)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Id,
    pub email: String,
    pub role: Role,
}
