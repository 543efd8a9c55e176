use std::collections::HashMap;

use crate::usecases::prelude::*;

/// Per-item vote tallies for a campaign's dashboard, including items
/// that have not received any votes yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTally {
    pub item: Item,
    pub votes_in: u64,
    pub votes_out: u64,
}

pub fn campaign_results<R>(repo: &R, campaign_id: &Id) -> Result<Vec<ItemTally>>
where
    R: CampaignRepo + ItemRepo + VoteRepo,
{
    let campaign = repo.get_campaign(campaign_id)?;
    let items = match &campaign.voting_list_id {
        Some(list_id) => repo.items_of_list(list_id)?,
        None => vec![],
    };
    let tallies: HashMap<Id, VoteTally> = repo
        .tally_votes_of_campaign(campaign_id)?
        .into_iter()
        .map(|tally| (tally.item_id.clone(), tally))
        .collect();
    Ok(items
        .into_iter()
        .map(|item| {
            let (votes_in, votes_out) = tallies
                .get(&item.id)
                .map(|t| (t.votes_in, t.votes_out))
                .unwrap_or((0, 0));
            ItemTally {
                item,
                votes_in,
                votes_out,
            }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinStats {
    pub total_spins: u64,
    pub wins_by_reward: Vec<(Id, u64)>,
}

pub fn wheel_spin_stats<R>(repo: &R, wheel_id: &Id) -> Result<SpinStats>
where
    R: SpinWheelRepo + SpinResultRepo,
{
    repo.get_spin_wheel(wheel_id)?;
    let wins_by_reward = repo.count_spin_results_by_reward(wheel_id)?;
    let total_spins = wins_by_reward.iter().map(|(_, count)| count).sum();
    Ok(SpinStats {
        total_spins,
        wins_by_reward,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromoStats {
    pub views: u64,
    pub clicks: u64,
    pub click_through_rate: f64,
}

pub fn tracker_promo_stats<R>(repo: &R, tracker_id: &Id) -> Result<PromoStats>
where
    R: TrackerRepo,
{
    let tracker = repo.get_tracker(tracker_id)?;
    Ok(PromoStats {
        views: tracker.promo_views,
        clicks: tracker.promo_clicks,
        click_through_rate: tracker.click_through_rate(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{self, tests::{fixtures, MockDb}};

    #[test]
    fn tallies_cover_items_without_votes() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let tallies = campaign_results(&db, &fx.campaign_id).unwrap();
        assert_eq!(tallies.len(), 3);
        assert!(tallies
            .iter()
            .all(|tally| tally.votes_in == 0 && tally.votes_out == 0));
    }

    #[test]
    fn promo_stats_report_the_click_through_rate() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let tracker = usecases::create_tracker(
            &db,
            usecases::NewTracker {
                business_id: fx.business_id,
                name: "Monthly goal".into(),
                revenue_goal_cents: 1000,
                promo_message: None,
                promo_active: false,
            },
        )
        .unwrap();
        for _ in 0..4 {
            db.increment_promo_views(&tracker.id).unwrap();
        }
        db.increment_promo_clicks(&tracker.id).unwrap();
        let stats = tracker_promo_stats(&db, &tracker.id).unwrap();
        assert_eq!(stats.views, 4);
        assert_eq!(stats.clicks, 1);
        assert_eq!(stats.click_through_rate, 0.25);
    }

    #[test]
    fn promo_stats_without_views_have_zero_rate() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let tracker = usecases::create_tracker(
            &db,
            usecases::NewTracker {
                business_id: fx.business_id,
                name: "Monthly goal".into(),
                revenue_goal_cents: 1000,
                promo_message: None,
                promo_active: false,
            },
        )
        .unwrap();
        let stats = tracker_promo_stats(&db, &tracker.id).unwrap();
        assert_eq!(stats.click_through_rate, 0.0);
    }
}
