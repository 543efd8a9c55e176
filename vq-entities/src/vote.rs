use std::{fmt, str::FromStr};

use strum::{AsRefStr, EnumString};

use crate::{id::Id, time::Timestamp, week::IsoWeek};

/// Binary sentiment signal a voter casts on a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum VoteType {
    VoteIn,
    VoteOut,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid vote type")]
pub struct VoteTypeParseError;

impl VoteType {
    pub fn parse(s: &str) -> Result<Self, VoteTypeParseError> {
        Self::from_str(s).map_err(|_| VoteTypeParseError)
    }
}

/// Who cast a vote. Authenticated users and anonymous IPs are tracked
/// as independent identity spaces; quotas never cross between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VoterIdentity {
    User(Id),
    Ip(String),
}

impl VoterIdentity {
    pub fn user_id(&self) -> Option<&Id> {
        match self {
            Self::User(id) => Some(id),
            Self::Ip(_) => None,
        }
    }
}

impl fmt::Display for VoterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::User(id) => write!(f, "user:{id}"),
            Self::Ip(ip) => write!(f, "ip:{ip}"),
        }
    }
}

/// An append-only vote record. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub id: Id,
    pub item_id: Id,
    pub campaign_id: Id,
    pub vote_type: VoteType,
    pub voter: VoterIdentity,
    pub created_at: Timestamp,
    /// Quota bucket, derived from `created_at` at insert time.
    pub cast_in_week: IsoWeek,
}
