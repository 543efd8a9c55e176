use std::cell::RefCell;

use crate::{repositories::*, usecases::prelude::*, RepoError};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory stand-in for the SQLite repositories, good enough for
/// exercising use-case logic without a database.
#[derive(Default)]
pub struct MockDb {
    pub businesses: RefCell<Vec<Business>>,
    pub users: RefCell<Vec<User>>,
    pub machines: RefCell<Vec<Machine>>,
    pub qr_codes: RefCell<Vec<QrCode>>,
    pub campaigns: RefCell<Vec<Campaign>>,
    pub voting_lists: RefCell<Vec<VotingList>>,
    pub items: RefCell<Vec<Item>>,
    pub votes: RefCell<Vec<Vote>>,
    pub coin_transactions: RefCell<Vec<CoinTransaction>>,
    pub spin_wheels: RefCell<Vec<SpinWheel>>,
    pub rewards: RefCell<Vec<Reward>>,
    pub spin_results: RefCell<Vec<SpinResult>>,
    pub trackers: RefCell<Vec<PizzaTracker>>,
    pub revenue_events: RefCell<Vec<RevenueEvent>>,
    pub notification_preferences: RefCell<Vec<NotificationPreferences>>,
    pub scan_logs: RefCell<Vec<ScanLog>>,
}

impl MockDb {
    pub fn deactivate_reward_for_test(&self, id: &Id) {
        for reward in self.rewards.borrow_mut().iter_mut() {
            if &reward.id == id {
                reward.active = false;
            }
        }
    }
}

impl BusinessRepo for MockDb {
    fn create_business(&self, business: &Business) -> RepoResult<()> {
        self.businesses.borrow_mut().push(business.clone());
        Ok(())
    }
    fn get_business(&self, id: &Id) -> RepoResult<Business> {
        self.businesses
            .borrow()
            .iter()
            .find(|b| &b.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn count_businesses(&self) -> RepoResult<usize> {
        Ok(self.businesses.borrow().len())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.try_get_user_by_email(&user.email)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }
    fn get_user(&self, id: &Id) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| &u.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn get_user_by_email(&self, email: &str) -> RepoResult<User> {
        self.try_get_user_by_email(email)?.ok_or(RepoError::NotFound)
    }
    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

impl MachineRepo for MockDb {
    fn create_machine(&self, machine: &Machine) -> RepoResult<()> {
        self.machines.borrow_mut().push(machine.clone());
        Ok(())
    }
    fn get_machine(&self, id: &Id) -> RepoResult<Machine> {
        self.machines
            .borrow()
            .iter()
            .find(|m| &m.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn machines_of_business(&self, business_id: &Id) -> RepoResult<Vec<Machine>> {
        Ok(self
            .machines
            .borrow()
            .iter()
            .filter(|m| &m.business_id == business_id)
            .cloned()
            .collect())
    }
}

impl QrCodeRepo for MockDb {
    fn create_qr_code(&self, qr_code: &QrCode) -> RepoResult<()> {
        if self.try_get_qr_code_by_code(&qr_code.code)?.is_some() {
            return Err(RepoError::AlreadyExists);
        }
        self.qr_codes.borrow_mut().push(qr_code.clone());
        Ok(())
    }
    fn try_get_qr_code_by_code(&self, code: &str) -> RepoResult<Option<QrCode>> {
        Ok(self
            .qr_codes
            .borrow()
            .iter()
            .find(|qr| qr.code == code)
            .cloned())
    }
}

impl CampaignRepo for MockDb {
    fn create_campaign(&self, campaign: &Campaign) -> RepoResult<()> {
        self.campaigns.borrow_mut().push(campaign.clone());
        Ok(())
    }
    fn get_campaign(&self, id: &Id) -> RepoResult<Campaign> {
        self.campaigns
            .borrow()
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn campaigns_of_business(&self, business_id: &Id) -> RepoResult<Vec<Campaign>> {
        Ok(self
            .campaigns
            .borrow()
            .iter()
            .filter(|c| &c.business_id == business_id)
            .cloned()
            .collect())
    }
    fn update_campaign_status(&self, id: &Id, status: CampaignStatus) -> RepoResult<()> {
        for campaign in self.campaigns.borrow_mut().iter_mut() {
            if &campaign.id == id {
                campaign.status = status;
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
}

impl VotingListRepo for MockDb {
    fn create_voting_list(&self, list: &VotingList) -> RepoResult<()> {
        self.voting_lists.borrow_mut().push(list.clone());
        Ok(())
    }
    fn get_voting_list(&self, id: &Id) -> RepoResult<VotingList> {
        self.voting_lists
            .borrow()
            .iter()
            .find(|l| &l.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl ItemRepo for MockDb {
    fn create_item(&self, item: &Item) -> RepoResult<()> {
        self.items.borrow_mut().push(item.clone());
        Ok(())
    }
    fn get_item(&self, id: &Id) -> RepoResult<Item> {
        self.items
            .borrow()
            .iter()
            .find(|i| &i.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn items_of_list(&self, list_id: &Id) -> RepoResult<Vec<Item>> {
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|i| &i.list_id == list_id)
            .cloned()
            .collect())
    }
    fn search_items(&self, query: &ItemQuery, pagination: &Pagination) -> RepoResult<Vec<Item>> {
        let text = query.text.as_deref().unwrap_or("").to_lowercase();
        let offset = pagination.offset.unwrap_or(0) as usize;
        let limit = pagination.limit.unwrap_or(u64::MAX) as usize;
        Ok(self
            .items
            .borrow()
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&text))
            .filter(|i| {
                query
                    .category
                    .as_ref()
                    .map(|c| i.category.as_ref() == Some(c))
                    .unwrap_or(true)
            })
            .filter(|i| {
                query
                    .list_id
                    .as_ref()
                    .map(|l| &i.list_id == l)
                    .unwrap_or(true)
            })
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
    fn set_item_inventory(&self, id: &Id, inventory: i64) -> RepoResult<()> {
        for item in self.items.borrow_mut().iter_mut() {
            if &item.id == id {
                item.inventory = inventory;
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
}

impl VoteRepo for MockDb {
    fn create_vote(&self, vote: &Vote) -> RepoResult<()> {
        self.votes.borrow_mut().push(vote.clone());
        Ok(())
    }
    fn count_votes_of_voter_in_week(
        &self,
        voter: &VoterIdentity,
        week: IsoWeek,
    ) -> RepoResult<u64> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .filter(|v| &v.voter == voter && v.cast_in_week == week)
            .count() as u64)
    }
    fn voter_has_voted_for_item_in_week(
        &self,
        voter: &VoterIdentity,
        item_id: &Id,
        week: IsoWeek,
    ) -> RepoResult<bool> {
        Ok(self
            .votes
            .borrow()
            .iter()
            .any(|v| &v.voter == voter && &v.item_id == item_id && v.cast_in_week == week))
    }
    fn tally_votes_of_campaign(&self, campaign_id: &Id) -> RepoResult<Vec<VoteTally>> {
        let mut tallies: Vec<VoteTally> = vec![];
        for vote in self
            .votes
            .borrow()
            .iter()
            .filter(|v| &v.campaign_id == campaign_id)
        {
            let tally = match tallies.iter_mut().find(|t| t.item_id == vote.item_id) {
                Some(tally) => tally,
                None => {
                    tallies.push(VoteTally {
                        item_id: vote.item_id.clone(),
                        votes_in: 0,
                        votes_out: 0,
                    });
                    tallies.last_mut().unwrap()
                }
            };
            match vote.vote_type {
                VoteType::VoteIn => tally.votes_in += 1,
                VoteType::VoteOut => tally.votes_out += 1,
            }
        }
        Ok(tallies)
    }
}

impl CoinRepo for MockDb {
    fn credit_coins(&self, tx: &CoinTransaction) -> RepoResult<()> {
        self.coin_transactions.borrow_mut().push(tx.clone());
        Ok(())
    }
    fn coin_balance_of_user(&self, user_id: &Id) -> RepoResult<i64> {
        Ok(self
            .coin_transactions
            .borrow()
            .iter()
            .filter(|tx| &tx.user_id == user_id)
            .map(|tx| tx.amount)
            .sum())
    }
}

impl SpinWheelRepo for MockDb {
    fn create_spin_wheel(&self, wheel: &SpinWheel) -> RepoResult<()> {
        self.spin_wheels.borrow_mut().push(wheel.clone());
        Ok(())
    }
    fn get_spin_wheel(&self, id: &Id) -> RepoResult<SpinWheel> {
        self.spin_wheels
            .borrow()
            .iter()
            .find(|w| &w.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
}

impl RewardRepo for MockDb {
    fn create_reward(&self, reward: &Reward) -> RepoResult<()> {
        self.rewards.borrow_mut().push(reward.clone());
        Ok(())
    }
    fn active_rewards_of_wheel(&self, wheel_id: &Id) -> RepoResult<Vec<Reward>> {
        Ok(self
            .rewards
            .borrow()
            .iter()
            .filter(|r| &r.wheel_id == wheel_id && r.active)
            .cloned()
            .collect())
    }
}

impl SpinResultRepo for MockDb {
    fn create_spin_result(&self, result: &SpinResult) -> RepoResult<()> {
        self.spin_results.borrow_mut().push(result.clone());
        Ok(())
    }
    fn spin_results_of_wheel(&self, wheel_id: &Id) -> RepoResult<Vec<SpinResult>> {
        Ok(self
            .spin_results
            .borrow()
            .iter()
            .filter(|r| &r.wheel_id == wheel_id)
            .cloned()
            .collect())
    }
    fn count_spin_results_by_reward(&self, wheel_id: &Id) -> RepoResult<Vec<(Id, u64)>> {
        let mut counts: Vec<(Id, u64)> = vec![];
        for result in self
            .spin_results
            .borrow()
            .iter()
            .filter(|r| &r.wheel_id == wheel_id)
        {
            match counts.iter_mut().find(|(id, _)| id == &result.reward_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((result.reward_id.clone(), 1)),
            }
        }
        Ok(counts)
    }
}

impl TrackerRepo for MockDb {
    fn create_tracker(&self, tracker: &PizzaTracker) -> RepoResult<()> {
        self.trackers.borrow_mut().push(tracker.clone());
        Ok(())
    }
    fn get_tracker(&self, id: &Id) -> RepoResult<PizzaTracker> {
        self.trackers
            .borrow()
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }
    fn trackers_of_business(&self, business_id: &Id) -> RepoResult<Vec<PizzaTracker>> {
        Ok(self
            .trackers
            .borrow()
            .iter()
            .filter(|t| &t.business_id == business_id)
            .cloned()
            .collect())
    }
    fn add_tracker_revenue(&self, id: &Id, amount_cents: i64) -> RepoResult<()> {
        for tracker in self.trackers.borrow_mut().iter_mut() {
            if &tracker.id == id {
                tracker.current_revenue_cents += amount_cents;
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
    fn complete_tracker_cycle(&self, id: &Id, completed_at: Timestamp) -> RepoResult<()> {
        for tracker in self.trackers.borrow_mut().iter_mut() {
            if &tracker.id == id {
                tracker.current_revenue_cents = 0;
                tracker.completion_count += 1;
                tracker.last_completion_at = Some(completed_at);
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
    fn append_revenue_event(&self, event: &RevenueEvent) -> RepoResult<()> {
        self.revenue_events.borrow_mut().push(event.clone());
        Ok(())
    }
    fn increment_promo_views(&self, id: &Id) -> RepoResult<()> {
        for tracker in self.trackers.borrow_mut().iter_mut() {
            if &tracker.id == id {
                tracker.promo_views += 1;
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
    fn increment_promo_clicks(&self, id: &Id) -> RepoResult<()> {
        for tracker in self.trackers.borrow_mut().iter_mut() {
            if &tracker.id == id {
                tracker.promo_clicks += 1;
                return Ok(());
            }
        }
        Err(RepoError::NotFound)
    }
}

impl ScanLogRepo for MockDb {
    fn create_scan_log(&self, log: &ScanLog) -> RepoResult<()> {
        self.scan_logs.borrow_mut().push(log.clone());
        Ok(())
    }
}

impl NotificationPrefsRepo for MockDb {
    fn upsert_notification_preferences(
        &self,
        prefs: &NotificationPreferences,
    ) -> RepoResult<()> {
        let mut stored = self.notification_preferences.borrow_mut();
        if let Some(existing) = stored
            .iter_mut()
            .find(|p| p.business_id == prefs.business_id)
        {
            *existing = prefs.clone();
        } else {
            stored.push(prefs.clone());
        }
        Ok(())
    }
    fn try_get_notification_preferences(
        &self,
        business_id: &Id,
    ) -> RepoResult<Option<NotificationPreferences>> {
        Ok(self
            .notification_preferences
            .borrow()
            .iter()
            .find(|p| &p.business_id == business_id)
            .cloned())
    }
}

pub struct Fixtures {
    pub business_id: Id,
    pub list_id: Id,
    pub item_ids: Vec<Id>,
    pub campaign_id: Id,
    pub wheel_id: Id,
}

/// Seeds one business with an active campaign over a three-item list
/// and an empty spin wheel.
pub fn fixtures(db: &MockDb) -> Fixtures {
    let business = Business {
        id: Id::new(),
        name: "Acme Vending".into(),
        owner_email: "owner@example.com".into(),
        created_at: Timestamp::from_secs(0),
    };
    db.create_business(&business).unwrap();

    let list = VotingList {
        id: Id::new(),
        business_id: business.id.clone(),
        name: "Snacks".into(),
    };
    db.create_voting_list(&list).unwrap();

    let mut item_ids = vec![];
    for name in ["Cola", "Chips", "Granola"] {
        let item = Item {
            id: Id::new(),
            list_id: list.id.clone(),
            name: name.into(),
            category: Some("snack".into()),
            retail_price_cents: 250,
            inventory: 10,
        };
        db.create_item(&item).unwrap();
        item_ids.push(item.id);
    }

    let campaign = Campaign {
        id: Id::new(),
        business_id: business.id.clone(),
        name: "Spring vote".into(),
        status: CampaignStatus::Active,
        starts_at: Timestamp::from_secs(0),
        ends_at: Timestamp::from_secs(i64::MAX),
        voting_list_id: Some(list.id.clone()),
    };
    db.create_campaign(&campaign).unwrap();

    let wheel = SpinWheel {
        id: Id::new(),
        business_id: business.id.clone(),
        name: "Lucky wheel".into(),
    };
    db.create_spin_wheel(&wheel).unwrap();

    Fixtures {
        business_id: business.id,
        list_id: list.id,
        item_ids,
        campaign_id: campaign.id,
        wheel_id: wheel.id,
    }
}
