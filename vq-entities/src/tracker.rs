use crate::{id::Id, time::Timestamp};

/// A gamified revenue-accumulation goal per business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaTracker {
    pub id: Id,
    pub business_id: Id,
    pub name: String,
    pub revenue_goal_cents: i64,
    pub current_revenue_cents: i64,
    pub completion_count: u32,
    pub last_completion_at: Option<Timestamp>,
    pub promo_message: Option<String>,
    pub promo_active: bool,
    pub promo_views: u64,
    pub promo_clicks: u64,
}

impl PizzaTracker {
    /// Click-through rate of the promotional banner, computed at read
    /// time and never stored.
    pub fn click_through_rate(&self) -> f64 {
        if self.promo_views == 0 {
            return 0.0;
        }
        self.promo_clicks as f64 / self.promo_views as f64
    }
}

/// Append-only record of a qualifying revenue event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueEvent {
    pub id: Id,
    pub tracker_id: Id,
    pub amount_cents: i64,
    pub created_at: Timestamp,
}
