// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::{
    business::*, campaign::*, coin::*, id::*, item::*, machine::*, notification::*, qr_code::*,
    reward::*, scan::*, spin::*, time::*, tracker::*, user::*, vote::*, week::*,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub trait BusinessRepo {
    fn create_business(&self, business: &Business) -> Result<()>;
    fn get_business(&self, id: &Id) -> Result<Business>;
    fn count_businesses(&self) -> Result<usize>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &Id) -> Result<User>;
    fn get_user_by_email(&self, email: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

pub trait MachineRepo {
    fn create_machine(&self, machine: &Machine) -> Result<()>;
    fn get_machine(&self, id: &Id) -> Result<Machine>;
    fn machines_of_business(&self, business_id: &Id) -> Result<Vec<Machine>>;
}

pub trait QrCodeRepo {
    fn create_qr_code(&self, qr_code: &QrCode) -> Result<()>;
    /// Exact match on the stored code string.
    fn try_get_qr_code_by_code(&self, code: &str) -> Result<Option<QrCode>>;
}

pub trait CampaignRepo {
    fn create_campaign(&self, campaign: &Campaign) -> Result<()>;
    fn get_campaign(&self, id: &Id) -> Result<Campaign>;
    fn campaigns_of_business(&self, business_id: &Id) -> Result<Vec<Campaign>>;
    fn update_campaign_status(&self, id: &Id, status: CampaignStatus) -> Result<()>;
}

pub trait VotingListRepo {
    fn create_voting_list(&self, list: &VotingList) -> Result<()>;
    fn get_voting_list(&self, id: &Id) -> Result<VotingList>;
}

#[derive(Debug, Default, Clone)]
pub struct ItemQuery {
    pub text: Option<String>,
    pub category: Option<String>,
    pub list_id: Option<Id>,
}

pub trait ItemRepo {
    fn create_item(&self, item: &Item) -> Result<()>;
    fn get_item(&self, id: &Id) -> Result<Item>;
    fn items_of_list(&self, list_id: &Id) -> Result<Vec<Item>>;
    fn search_items(&self, query: &ItemQuery, pagination: &Pagination) -> Result<Vec<Item>>;
    /// Atomic overwrite of the stock counter.
    fn set_item_inventory(&self, id: &Id, inventory: i64) -> Result<()>;
}

/// Per-item aggregate of a campaign's votes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    pub item_id: Id,
    pub votes_in: u64,
    pub votes_out: u64,
}

pub trait VoteRepo {
    fn create_vote(&self, vote: &Vote) -> Result<()>;
    fn count_votes_of_voter_in_week(&self, voter: &VoterIdentity, week: IsoWeek) -> Result<u64>;
    fn voter_has_voted_for_item_in_week(
        &self,
        voter: &VoterIdentity,
        item_id: &Id,
        week: IsoWeek,
    ) -> Result<bool>;
    fn tally_votes_of_campaign(&self, campaign_id: &Id) -> Result<Vec<VoteTally>>;
}

pub trait CoinRepo {
    fn credit_coins(&self, tx: &CoinTransaction) -> Result<()>;
    fn coin_balance_of_user(&self, user_id: &Id) -> Result<i64>;
}

pub trait SpinWheelRepo {
    fn create_spin_wheel(&self, wheel: &SpinWheel) -> Result<()>;
    fn get_spin_wheel(&self, id: &Id) -> Result<SpinWheel>;
}

pub trait RewardRepo {
    fn create_reward(&self, reward: &Reward) -> Result<()>;
    /// Active rewards in stable insertion order. The draw's tie-break
    /// depends on this order.
    fn active_rewards_of_wheel(&self, wheel_id: &Id) -> Result<Vec<Reward>>;
}

pub trait SpinResultRepo {
    fn create_spin_result(&self, result: &SpinResult) -> Result<()>;
    fn spin_results_of_wheel(&self, wheel_id: &Id) -> Result<Vec<SpinResult>>;
    /// Outcome counts per reward for the dashboard.
    fn count_spin_results_by_reward(&self, wheel_id: &Id) -> Result<Vec<(Id, u64)>>;
}

pub trait TrackerRepo {
    fn create_tracker(&self, tracker: &PizzaTracker) -> Result<()>;
    fn get_tracker(&self, id: &Id) -> Result<PizzaTracker>;
    fn trackers_of_business(&self, business_id: &Id) -> Result<Vec<PizzaTracker>>;
    /// Atomic `revenue = revenue + amount`.
    fn add_tracker_revenue(&self, id: &Id, amount_cents: i64) -> Result<()>;
    /// Ends the current cycle: resets the accumulated revenue,
    /// increments the completion counter and records the time.
    fn complete_tracker_cycle(&self, id: &Id, completed_at: Timestamp) -> Result<()>;
    fn append_revenue_event(&self, event: &RevenueEvent) -> Result<()>;
    /// Atomic counter increments; never read-modify-write.
    fn increment_promo_views(&self, id: &Id) -> Result<()>;
    fn increment_promo_clicks(&self, id: &Id) -> Result<()>;
}

pub trait NotificationPrefsRepo {
    fn upsert_notification_preferences(&self, prefs: &NotificationPreferences) -> Result<()>;
    fn try_get_notification_preferences(
        &self,
        business_id: &Id,
    ) -> Result<Option<NotificationPreferences>>;
}

pub trait ScanLogRepo {
    fn create_scan_log(&self, log: &ScanLog) -> Result<()>;
}
