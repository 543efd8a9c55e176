use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::{id::Id, time::Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid campaign status")]
pub struct CampaignStatusParseError;

impl CampaignStatus {
    pub fn parse(s: &str) -> Result<Self, CampaignStatusParseError> {
        Self::from_str(s).map_err(|_| CampaignStatusParseError)
    }
}

/// A time-bounded voting or promotion context tying items to a business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: Id,
    pub business_id: Id,
    pub name: String,
    pub status: CampaignStatus,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    /// The attached voting list, if any.
    pub voting_list_id: Option<Id>,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}
