#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All columns with the `_at` postfix are stored as unix timestamps
// in seconds. Enumerations are stored as their snake_case text
// representation.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = businesses)]
pub struct NewBusiness<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub owner_email: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct BusinessEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub owner_email: String,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub role: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub email: String,
    pub role: String,
}

#[derive(Insertable)]
#[diesel(table_name = machines)]
pub struct NewMachine<'a> {
    pub id: &'a str,
    pub business_id: &'a str,
    pub name: &'a str,
    pub location: Option<&'a str>,
}

#[derive(Queryable)]
pub struct MachineEntity {
    pub rowid: i64,
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub location: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = voting_lists)]
pub struct NewVotingList<'a> {
    pub id: &'a str,
    pub business_id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct VotingListEntity {
    pub rowid: i64,
    pub id: String,
    pub business_id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
pub struct NewItem<'a> {
    pub id: &'a str,
    pub list_id: &'a str,
    pub name: &'a str,
    pub category: Option<&'a str>,
    pub retail_price_cents: i64,
    pub inventory: i64,
}

#[derive(Queryable)]
pub struct ItemEntity {
    pub rowid: i64,
    pub id: String,
    pub list_id: String,
    pub name: String,
    pub category: Option<String>,
    pub retail_price_cents: i64,
    pub inventory: i64,
}

#[derive(Insertable)]
#[diesel(table_name = campaigns)]
pub struct NewCampaign<'a> {
    pub id: &'a str,
    pub business_id: &'a str,
    pub name: &'a str,
    pub status: &'a str,
    pub starts_at: i64,
    pub ends_at: i64,
    pub voting_list_id: Option<&'a str>,
}

#[derive(Queryable)]
pub struct CampaignEntity {
    pub rowid: i64,
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub status: String,
    pub starts_at: i64,
    pub ends_at: i64,
    pub voting_list_id: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = qr_codes)]
pub struct NewQrCode<'a> {
    pub id: &'a str,
    pub code: &'a str,
    pub business_id: &'a str,
    pub campaign_id: Option<&'a str>,
    pub machine_id: Option<&'a str>,
    pub qr_type: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct QrCodeEntity {
    pub rowid: i64,
    pub id: String,
    pub code: String,
    pub business_id: String,
    pub campaign_id: Option<String>,
    pub machine_id: Option<String>,
    pub qr_type: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = votes)]
pub struct NewVote<'a> {
    pub id: &'a str,
    pub item_id: &'a str,
    pub campaign_id: &'a str,
    pub vote_type: &'a str,
    pub voter_user_id: Option<&'a str>,
    pub voter_ip: Option<&'a str>,
    pub iso_year: i32,
    pub iso_week: i16,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = coin_transactions)]
pub struct NewCoinTransaction<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub amount: i64,
    pub reason: &'a str,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = spin_wheels)]
pub struct NewSpinWheel<'a> {
    pub id: &'a str,
    pub business_id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct SpinWheelEntity {
    pub rowid: i64,
    pub id: String,
    pub business_id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = rewards)]
pub struct NewReward<'a> {
    pub id: &'a str,
    pub wheel_id: &'a str,
    pub name: &'a str,
    pub rarity_level: i16,
    pub active: bool,
    pub code: Option<&'a str>,
    pub link: Option<&'a str>,
}

#[derive(Queryable)]
pub struct RewardEntity {
    pub rowid: i64,
    pub id: String,
    pub wheel_id: String,
    pub name: String,
    pub rarity_level: i16,
    pub active: bool,
    pub code: Option<String>,
    pub link: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = spin_results)]
pub struct NewSpinResult<'a> {
    pub id: &'a str,
    pub wheel_id: &'a str,
    pub reward_id: &'a str,
    pub user_ip: &'a str,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct SpinResultEntity {
    pub rowid: i64,
    pub id: String,
    pub wheel_id: String,
    pub reward_id: String,
    pub user_ip: String,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = pizza_trackers)]
pub struct NewTracker<'a> {
    pub id: &'a str,
    pub business_id: &'a str,
    pub name: &'a str,
    pub revenue_goal_cents: i64,
    pub current_revenue_cents: i64,
    pub completion_count: i32,
    pub last_completion_at: Option<i64>,
    pub promo_message: Option<&'a str>,
    pub promo_active: bool,
    pub promo_views: i64,
    pub promo_clicks: i64,
}

#[derive(Queryable)]
pub struct TrackerEntity {
    pub rowid: i64,
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub revenue_goal_cents: i64,
    pub current_revenue_cents: i64,
    pub completion_count: i32,
    pub last_completion_at: Option<i64>,
    pub promo_message: Option<String>,
    pub promo_active: bool,
    pub promo_views: i64,
    pub promo_clicks: i64,
}

#[derive(Insertable)]
#[diesel(table_name = tracker_revenue_events)]
pub struct NewRevenueEvent<'a> {
    pub id: &'a str,
    pub tracker_id: &'a str,
    pub amount_cents: i64,
    pub created_at: i64,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = notification_preferences)]
pub struct NewNotificationPrefs<'a> {
    pub business_id: &'a str,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    pub milestones: String,
}

#[derive(Queryable)]
pub struct NotificationPrefsEntity {
    pub rowid: i64,
    pub business_id: String,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub push_enabled: bool,
    pub milestones: String,
}

#[derive(Insertable)]
#[diesel(table_name = scan_logs)]
pub struct NewScanLog<'a> {
    pub id: &'a str,
    pub admin_user_id: &'a str,
    pub raw_input: &'a str,
    pub outcome: &'a str,
    pub response: &'a str,
    pub elapsed_millis: i64,
    pub created_at: i64,
}
