//! Serializable request and response bodies of the public JSON API.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedAction {
    pub kind: String,
    pub message: String,
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SimulatedAction>,
    /// Remediation hints, present only when no code matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub campaign_id: String,
    pub item_id: String,
    /// `vote_in` or `vote_out`.
    pub vote_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub vote_id: String,
    pub coins_awarded: i64,
    pub votes_remaining_this_week: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub retail_price_cents: i64,
    pub inventory: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTally {
    pub item: Item,
    pub votes_in: u64,
    pub votes_out: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryUpdate {
    pub inventory: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub id: String,
    pub name: String,
    pub rarity_level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResponse {
    pub result_id: String,
    pub reward: Reward,
    pub spun_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerStatus {
    pub id: String,
    pub name: String,
    pub revenue_goal_cents: i64,
    pub current_revenue_cents: i64,
    pub progress_percent: f64,
    pub completion_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completion_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_message: Option<String>,
    pub promo_active: bool,
    pub promo_views: u64,
    pub promo_clicks: u64,
    pub click_through_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueRequest {
    pub amount_cents: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub previous_percent: f64,
    pub percent: f64,
    pub is_complete: bool,
    pub milestones_crossed: Vec<u8>,
    pub tracker: TrackerStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    pub milestones: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinBalance {
    pub balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardWins {
    pub reward_id: String,
    pub wins: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinStats {
    pub total_spins: u64,
    pub wins_by_reward: Vec<RewardWins>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
