use super::*;
use vq_entities as e;

impl From<e::item::Item> for Item {
    fn from(from: e::item::Item) -> Self {
        let e::item::Item {
            id,
            list_id: _,
            name,
            category,
            retail_price_cents,
            inventory,
        } = from;
        Self {
            id: id.into(),
            name,
            category,
            retail_price_cents,
            inventory,
        }
    }
}

impl From<e::reward::Reward> for Reward {
    fn from(from: e::reward::Reward) -> Self {
        let e::reward::Reward {
            id,
            wheel_id: _,
            name,
            rarity,
            active: _,
            code,
            link,
        } = from;
        Self {
            id: id.into(),
            name,
            rarity_level: rarity.into(),
            code,
            link,
        }
    }
}

impl From<e::notification::NotificationPreferences> for NotificationPreferences {
    fn from(from: e::notification::NotificationPreferences) -> Self {
        let e::notification::NotificationPreferences {
            business_id: _,
            email_enabled,
            sms_enabled,
            push_enabled,
            milestones,
        } = from;
        Self {
            email_enabled,
            sms_enabled,
            push_enabled,
            milestones,
        }
    }
}

impl TrackerStatus {
    /// The progress percentage is domain logic and computed by the
    /// caller; everything else maps straight from the entity.
    pub fn from_tracker(tracker: e::tracker::PizzaTracker, progress_percent: f64) -> Self {
        let click_through_rate = tracker.click_through_rate();
        let e::tracker::PizzaTracker {
            id,
            business_id: _,
            name,
            revenue_goal_cents,
            current_revenue_cents,
            completion_count,
            last_completion_at,
            promo_message,
            promo_active,
            promo_views,
            promo_clicks,
        } = tracker;
        Self {
            id: id.into(),
            name,
            revenue_goal_cents,
            current_revenue_cents,
            progress_percent,
            completion_count,
            last_completion_at: last_completion_at.map(e::time::Timestamp::as_secs),
            promo_message,
            promo_active,
            promo_views,
            promo_clicks,
            click_through_rate,
        }
    }
}
