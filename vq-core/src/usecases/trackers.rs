use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewTracker {
    pub business_id: Id,
    pub name: String,
    pub revenue_goal_cents: i64,
    pub promo_message: Option<String>,
    pub promo_active: bool,
}

pub fn create_tracker<R>(repo: &R, new_tracker: NewTracker) -> Result<PizzaTracker>
where
    R: TrackerRepo + BusinessRepo,
{
    let NewTracker {
        business_id,
        name,
        revenue_goal_cents,
        promo_message,
        promo_active,
    } = new_tracker;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    if revenue_goal_cents <= 0 {
        return Err(Error::InvalidAmount);
    }
    repo.get_business(&business_id)?;
    let tracker = PizzaTracker {
        id: Id::new(),
        business_id,
        name: name.trim().to_owned(),
        revenue_goal_cents,
        current_revenue_cents: 0,
        completion_count: 0,
        last_completion_at: None,
        promo_message,
        promo_active,
        promo_views: 0,
        promo_clicks: 0,
    };
    repo.create_tracker(&tracker)?;
    Ok(tracker)
}

pub fn trackers_of_business<R>(repo: &R, business_id: &Id) -> Result<Vec<PizzaTracker>>
where
    R: TrackerRepo + BusinessRepo,
{
    repo.get_business(business_id)?;
    Ok(repo.trackers_of_business(business_id)?)
}
