pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    campaign_builder::*, item_builder::*, reward_builder::*, tracker_builder::*,
};

pub mod campaign_builder {

    use super::*;
    use crate::{campaign::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CampaignBuild {
        campaign: Campaign,
    }

    impl CampaignBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.campaign.id = id.into();
            self
        }
        pub fn business(mut self, id: &str) -> Self {
            self.campaign.business_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.campaign.name = name.into();
            self
        }
        pub fn status(mut self, status: CampaignStatus) -> Self {
            self.campaign.status = status;
            self
        }
        pub fn voting_list(mut self, id: &str) -> Self {
            self.campaign.voting_list_id = Some(id.into());
            self
        }
        pub fn finish(self) -> Campaign {
            self.campaign
        }
    }

    impl Builder for Campaign {
        type Build = CampaignBuild;
        fn build() -> Self::Build {
            CampaignBuild {
                campaign: Campaign {
                    id: Id::new(),
                    business_id: Id::new(),
                    name: "".into(),
                    status: CampaignStatus::Active,
                    starts_at: Timestamp::from_secs(0),
                    ends_at: Timestamp::from_secs(i64::MAX),
                    voting_list_id: None,
                },
            }
        }
    }
}

pub mod item_builder {

    use super::*;
    use crate::{id::*, item::*};

    #[derive(Debug)]
    pub struct ItemBuild {
        item: Item,
    }

    impl ItemBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.item.id = id.into();
            self
        }
        pub fn list(mut self, id: &str) -> Self {
            self.item.list_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.item.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.item.category = Some(category.into());
            self
        }
        pub fn inventory(mut self, inventory: i64) -> Self {
            self.item.inventory = inventory;
            self
        }
        pub fn finish(self) -> Item {
            self.item
        }
    }

    impl Builder for Item {
        type Build = ItemBuild;
        fn build() -> Self::Build {
            ItemBuild {
                item: Item {
                    id: Id::new(),
                    list_id: Id::new(),
                    name: "".into(),
                    category: None,
                    retail_price_cents: 0,
                    inventory: 0,
                },
            }
        }
    }
}

pub mod reward_builder {

    use super::*;
    use crate::{id::*, reward::*};

    #[derive(Debug)]
    pub struct RewardBuild {
        reward: Reward,
    }

    impl RewardBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.reward.id = id.into();
            self
        }
        pub fn wheel(mut self, id: &str) -> Self {
            self.reward.wheel_id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.reward.name = name.into();
            self
        }
        pub fn rarity(mut self, level: u8) -> Self {
            self.reward.rarity = RarityLevel::new(level).unwrap();
            self
        }
        pub fn inactive(mut self) -> Self {
            self.reward.active = false;
            self
        }
        pub fn finish(self) -> Reward {
            self.reward
        }
    }

    impl Builder for Reward {
        type Build = RewardBuild;
        fn build() -> Self::Build {
            RewardBuild {
                reward: Reward {
                    id: Id::new(),
                    wheel_id: Id::new(),
                    name: "".into(),
                    rarity: RarityLevel::min(),
                    active: true,
                    code: None,
                    link: None,
                },
            }
        }
    }
}

pub mod tracker_builder {

    use super::*;
    use crate::{id::*, tracker::*};

    #[derive(Debug)]
    pub struct TrackerBuild {
        tracker: PizzaTracker,
    }

    impl TrackerBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.tracker.id = id.into();
            self
        }
        pub fn business(mut self, id: &str) -> Self {
            self.tracker.business_id = id.into();
            self
        }
        pub fn goal(mut self, cents: i64) -> Self {
            self.tracker.revenue_goal_cents = cents;
            self
        }
        pub fn revenue(mut self, cents: i64) -> Self {
            self.tracker.current_revenue_cents = cents;
            self
        }
        pub fn finish(self) -> PizzaTracker {
            self.tracker
        }
    }

    impl Builder for PizzaTracker {
        type Build = TrackerBuild;
        fn build() -> Self::Build {
            TrackerBuild {
                tracker: PizzaTracker {
                    id: Id::new(),
                    business_id: Id::new(),
                    name: "".into(),
                    revenue_goal_cents: 0,
                    current_revenue_cents: 0,
                    completion_count: 0,
                    last_completion_at: None,
                    promo_message: None,
                    promo_active: false,
                    promo_views: 0,
                    promo_clicks: 0,
                },
            }
        }
    }
}
