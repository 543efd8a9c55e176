use std::cell::RefCell;

use super::{prelude as flows, sqlite, usecases, *};
use crate::error::{AppError, BError};
use vq_core::entities::{user::*, vote::*};

#[derive(Default)]
struct CapturingNotifyGW {
    milestones: RefCell<Vec<u8>>,
    milestone_revenues: RefCell<Vec<i64>>,
    completions: RefCell<Vec<u32>>,
}

impl NotificationGateway for CapturingNotifyGW {
    fn milestone_reached(&self, _recipients: &[String], tracker: &PizzaTracker, percent: u8) {
        self.milestones.borrow_mut().push(percent);
        self.milestone_revenues
            .borrow_mut()
            .push(tracker.current_revenue_cents);
    }
    fn tracker_completed(
        &self,
        _recipients: &[String],
        _tracker: &PizzaTracker,
        completion_count: u32,
    ) {
        self.completions.borrow_mut().push(completion_count);
    }
}

struct BackendFixture {
    connections: sqlite::Connections,
    notify: CapturingNotifyGW,
    business_id: Id,
    campaign_id: Id,
    item_ids: Vec<Id>,
    wheel_id: Id,
}

impl BackendFixture {
    fn new() -> Self {
        let connections = sqlite::Connections::init(":memory:", 1).unwrap();
        vq_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
        let mut connection = connections.exclusive().unwrap();
        let (business_id, campaign_id, item_ids, wheel_id) = connection
            .transaction(|conn| {
                let business = usecases::create_business(
                    conn,
                    usecases::NewBusiness {
                        name: "Acme Vending".into(),
                        owner_email: "owner@example.com".into(),
                    },
                    Timestamp::now(),
                )?;
                let list = usecases::create_voting_list(
                    conn,
                    usecases::NewVotingList {
                        business_id: business.id.clone(),
                        name: "Snacks".into(),
                    },
                )?;
                let mut item_ids = vec![];
                for name in ["Cola", "Chips", "Granola"] {
                    let item = usecases::create_item(
                        conn,
                        usecases::NewItem {
                            list_id: list.id.clone(),
                            name: name.into(),
                            category: Some("snack".into()),
                            retail_price_cents: 250,
                            inventory: 10,
                        },
                    )?;
                    item_ids.push(item.id);
                }
                let campaign = usecases::create_campaign(
                    conn,
                    usecases::NewCampaign {
                        business_id: business.id.clone(),
                        name: "Spring vote".into(),
                        starts_at: Timestamp::from_secs(0),
                        ends_at: Timestamp::from_secs(i64::MAX),
                        voting_list_id: Some(list.id.clone()),
                    },
                )?;
                usecases::activate_campaign(conn, &campaign.id)?;
                let wheel = usecases::create_spin_wheel(
                    conn,
                    usecases::NewSpinWheel {
                        business_id: business.id.clone(),
                        name: "Lucky wheel".into(),
                    },
                )?;
                Ok::<_, usecases::Error>((business.id, campaign.id, item_ids, wheel.id))
            })
            .unwrap();
        drop(connection);
        Self {
            connections,
            notify: CapturingNotifyGW::default(),
            business_id,
            campaign_id,
            item_ids,
            wheel_id,
        }
    }

    fn create_user(&self, email: &str, role: Role) -> User {
        let user = User {
            id: Id::new(),
            email: email.into(),
            role,
        };
        self.connections
            .exclusive()
            .unwrap()
            .inner()
            .create_user(&user)
            .unwrap();
        user
    }

    fn create_reward(&self, name: &str, rarity_level: u8) -> Reward {
        let mut connection = self.connections.exclusive().unwrap();
        connection
            .transaction(|conn| {
                usecases::create_reward(
                    conn,
                    usecases::NewReward {
                        wheel_id: self.wheel_id.clone(),
                        name: name.into(),
                        rarity_level,
                        code: None,
                        link: None,
                    },
                )
            })
            .unwrap()
    }

    fn create_tracker(&self, goal_cents: i64) -> PizzaTracker {
        let mut connection = self.connections.exclusive().unwrap();
        connection
            .transaction(|conn| {
                usecases::create_tracker(
                    conn,
                    usecases::NewTracker {
                        business_id: self.business_id.clone(),
                        name: "Monthly goal".into(),
                        revenue_goal_cents: goal_cents,
                        promo_message: Some("Free slice at 100%".into()),
                        promo_active: true,
                    },
                )
            })
            .unwrap()
    }

    fn new_vote(&self, voter: VoterIdentity, item_index: usize) -> usecases::NewVote {
        usecases::NewVote {
            voter,
            campaign_id: self.campaign_id.clone(),
            item_id: self.item_ids[item_index].clone(),
            vote_type: VoteType::VoteIn,
        }
    }
}

fn assert_quota_rejection(err: AppError) {
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::WeeklyVoteLimitReached))
    ));
}

#[test]
fn vote_quota_is_enforced_across_requests() {
    let fx = BackendFixture::new();
    let voter = VoterIdentity::Ip("203.0.113.9".into());
    flows::cast_vote(&fx.connections, fx.new_vote(voter.clone(), 0)).unwrap();
    flows::cast_vote(&fx.connections, fx.new_vote(voter.clone(), 1)).unwrap();
    let err = flows::cast_vote(&fx.connections, fx.new_vote(voter, 2)).unwrap_err();
    assert_quota_rejection(err);
}

#[test]
fn authenticated_vote_credits_coins_in_the_same_transaction() {
    let fx = BackendFixture::new();
    let user = fx.create_user("member@example.com", Role::User);
    let receipt = flows::cast_vote(
        &fx.connections,
        fx.new_vote(VoterIdentity::User(user.id.clone()), 0),
    )
    .unwrap();
    assert_eq!(receipt.coins_awarded, usecases::VOTE_REWARD_COINS);
    let balance = fx
        .connections
        .shared()
        .unwrap()
        .inner()
        .coin_balance_of_user(&user.id)
        .unwrap();
    assert_eq!(balance, usecases::VOTE_REWARD_COINS);
}

#[test]
fn duplicate_item_vote_is_rejected_before_the_quota() {
    let fx = BackendFixture::new();
    let voter = VoterIdentity::Ip("203.0.113.9".into());
    flows::cast_vote(&fx.connections, fx.new_vote(voter.clone(), 0)).unwrap();
    let err = flows::cast_vote(&fx.connections, fx.new_vote(voter, 0)).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::AlreadyVotedForItem))
    ));
}

#[test]
fn scan_simulator_resolves_generated_codes() {
    let fx = BackendFixture::new();
    let admin = fx.create_user("admin@example.com", Role::Admin);
    let mut connection = fx.connections.exclusive().unwrap();
    let qr_code = connection
        .transaction(|conn| {
            usecases::create_qr_code(
                conn,
                usecases::NewQrCode {
                    business_id: fx.business_id.clone(),
                    campaign_id: Some(fx.campaign_id.clone()),
                    machine_id: None,
                    qr_type: QrType::DynamicVoting,
                },
                Timestamp::now(),
            )
        })
        .unwrap();
    drop(connection);

    let outcome = flows::simulate_scan(
        &fx.connections,
        &admin.id,
        &format!("qr_{}", qr_code.code),
    )
    .unwrap();
    match outcome {
        flows::ScanOutcome::Matched(resolution) => {
            assert_eq!(resolution.qr_code.id, qr_code.id);
            assert_eq!(resolution.action.kind, "VOTING_INITIATED");
        }
        flows::ScanOutcome::NotFound { .. } => panic!("expected a match"),
    }
}

#[test]
fn scan_simulator_reports_hints_for_unknown_codes() {
    let fx = BackendFixture::new();
    let admin = fx.create_user("admin@example.com", Role::Admin);
    let outcome = flows::simulate_scan(&fx.connections, &admin.id, "qr_UNKNOWN").unwrap();
    match outcome {
        flows::ScanOutcome::NotFound { hints } => assert!(!hints.is_empty()),
        flows::ScanOutcome::Matched(_) => panic!("expected no match"),
    }
}

#[test]
fn spin_result_is_persisted_before_the_reveal() {
    let fx = BackendFixture::new();
    fx.create_reward("Free soda", 1);
    fx.create_reward("Gift card", 10);
    let mut rng = rand::thread_rng();
    let outcome = flows::spin_wheel(&fx.connections, &fx.wheel_id, "203.0.113.9", &mut rng).unwrap();
    let results = fx
        .connections
        .shared()
        .unwrap()
        .inner()
        .spin_results_of_wheel(&fx.wheel_id)
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, outcome.result.id);
    assert_eq!(results[0].reward_id, outcome.reward.id);
    assert_eq!(results[0].user_ip, "203.0.113.9");
}

#[test]
fn spin_without_active_rewards_leaves_no_audit_row() {
    let fx = BackendFixture::new();
    let mut rng = rand::thread_rng();
    let err = flows::spin_wheel(&fx.connections, &fx.wheel_id, "203.0.113.9", &mut rng).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::NoActiveRewards))
    ));
    let results = fx
        .connections
        .shared()
        .unwrap()
        .inner()
        .spin_results_of_wheel(&fx.wheel_id)
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn completing_a_tracker_resets_the_cycle_and_notifies() {
    let fx = BackendFixture::new();
    let tracker = fx.create_tracker(1000);

    let report = flows::record_revenue(&fx.connections, &fx.notify, &tracker.id, 600).unwrap();
    assert_eq!(report.update.milestones_crossed, vec![25, 50]);
    assert!(!report.update.is_complete);
    assert_eq!(report.tracker.current_revenue_cents, 600);

    let report = flows::record_revenue(&fx.connections, &fx.notify, &tracker.id, 400).unwrap();
    assert!(report.update.is_complete);
    assert_eq!(report.tracker.current_revenue_cents, 0);
    assert_eq!(report.tracker.completion_count, 1);
    assert!(report.tracker.last_completion_at.is_some());

    assert_eq!(*fx.notify.milestones.borrow(), vec![25, 50, 75, 90]);
    assert_eq!(*fx.notify.completions.borrow(), vec![1]);
}

#[test]
fn milestone_alerts_report_the_pre_reset_revenue() {
    let fx = BackendFixture::new();
    let tracker = fx.create_tracker(1000);
    let report = flows::record_revenue(&fx.connections, &fx.notify, &tracker.id, 1000).unwrap();
    assert!(report.update.is_complete);
    assert_eq!(report.tracker.current_revenue_cents, 0);
    // The completing event still announces its milestones with the
    // revenue that triggered them, not the reset counter.
    assert_eq!(*fx.notify.milestones.borrow(), vec![25, 50, 75, 90]);
    assert_eq!(*fx.notify.milestone_revenues.borrow(), vec![1000; 4]);
}

#[test]
fn disabled_email_channel_suppresses_alerts() {
    let fx = BackendFixture::new();
    let tracker = fx.create_tracker(1000);
    let mut connection = fx.connections.exclusive().unwrap();
    connection
        .transaction(|conn| {
            usecases::update_notification_preferences(
                conn,
                &fx.business_id,
                usecases::NotificationSettings {
                    email_enabled: false,
                    sms_enabled: false,
                    push_enabled: false,
                    milestones: DEFAULT_MILESTONES.to_vec(),
                },
            )
        })
        .unwrap();
    drop(connection);

    let report = flows::record_revenue(&fx.connections, &fx.notify, &tracker.id, 1000).unwrap();
    assert!(report.update.is_complete);
    assert!(fx.notify.milestones.borrow().is_empty());
    assert!(fx.notify.completions.borrow().is_empty());
}

#[test]
fn rejected_revenue_amount_leaves_the_tracker_untouched() {
    let fx = BackendFixture::new();
    let tracker = fx.create_tracker(1000);
    let err = flows::record_revenue(&fx.connections, &fx.notify, &tracker.id, 0).unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(usecases::Error::InvalidAmount))
    ));
    let stored = fx
        .connections
        .shared()
        .unwrap()
        .inner()
        .get_tracker(&tracker.id)
        .unwrap();
    assert_eq!(stored.current_revenue_cents, 0);
}

#[test]
fn promo_counters_accumulate_atomically() {
    let fx = BackendFixture::new();
    let tracker = fx.create_tracker(1000);
    flows::view_tracker(&fx.connections, &tracker.id).unwrap();
    flows::view_tracker(&fx.connections, &tracker.id).unwrap();
    let tracker = flows::click_promo(&fx.connections, &tracker.id).unwrap();
    assert_eq!(tracker.promo_views, 2);
    assert_eq!(tracker.promo_clicks, 1);
    assert_eq!(tracker.click_through_rate(), 0.5);
}
