///////////////////////////////////////////////////////////////////////
// Tenants & users
///////////////////////////////////////////////////////////////////////

table! {
    businesses (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        owner_email -> Text,
        created_at -> BigInt,
    }
}

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        email -> Text,
        role -> Text,
    }
}

table! {
    machines (rowid) {
        rowid -> BigInt,
        id -> Text,
        business_id -> Text,
        name -> Text,
        location -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Catalog & campaigns
///////////////////////////////////////////////////////////////////////

table! {
    voting_lists (rowid) {
        rowid -> BigInt,
        id -> Text,
        business_id -> Text,
        name -> Text,
    }
}

table! {
    items (rowid) {
        rowid -> BigInt,
        id -> Text,
        list_id -> Text,
        name -> Text,
        category -> Nullable<Text>,
        retail_price_cents -> BigInt,
        inventory -> BigInt,
    }
}

table! {
    campaigns (rowid) {
        rowid -> BigInt,
        id -> Text,
        business_id -> Text,
        name -> Text,
        status -> Text,
        starts_at -> BigInt,
        ends_at -> BigInt,
        voting_list_id -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// QR codes & scan audit log
///////////////////////////////////////////////////////////////////////

table! {
    qr_codes (rowid) {
        rowid -> BigInt,
        id -> Text,
        code -> Text,
        business_id -> Text,
        campaign_id -> Nullable<Text>,
        machine_id -> Nullable<Text>,
        qr_type -> Text,
        created_at -> BigInt,
    }
}

table! {
    scan_logs (rowid) {
        rowid -> BigInt,
        id -> Text,
        admin_user_id -> Text,
        raw_input -> Text,
        outcome -> Text,
        response -> Text,
        elapsed_millis -> BigInt,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Votes & coins
///////////////////////////////////////////////////////////////////////

table! {
    votes (rowid) {
        rowid -> BigInt,
        id -> Text,
        item_id -> Text,
        campaign_id -> Text,
        vote_type -> Text,
        voter_user_id -> Nullable<Text>,
        voter_ip -> Nullable<Text>,
        iso_year -> Integer,
        iso_week -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    coin_transactions (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_id -> Text,
        amount -> BigInt,
        reason -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Spin wheels
///////////////////////////////////////////////////////////////////////

table! {
    spin_wheels (rowid) {
        rowid -> BigInt,
        id -> Text,
        business_id -> Text,
        name -> Text,
    }
}

table! {
    rewards (rowid) {
        rowid -> BigInt,
        id -> Text,
        wheel_id -> Text,
        name -> Text,
        rarity_level -> SmallInt,
        active -> Bool,
        code -> Nullable<Text>,
        link -> Nullable<Text>,
    }
}

table! {
    spin_results (rowid) {
        rowid -> BigInt,
        id -> Text,
        wheel_id -> Text,
        reward_id -> Text,
        user_ip -> Text,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Revenue trackers & notifications
///////////////////////////////////////////////////////////////////////

table! {
    pizza_trackers (rowid) {
        rowid -> BigInt,
        id -> Text,
        business_id -> Text,
        name -> Text,
        revenue_goal_cents -> BigInt,
        current_revenue_cents -> BigInt,
        completion_count -> Integer,
        last_completion_at -> Nullable<BigInt>,
        promo_message -> Nullable<Text>,
        promo_active -> Bool,
        promo_views -> BigInt,
        promo_clicks -> BigInt,
    }
}

table! {
    tracker_revenue_events (rowid) {
        rowid -> BigInt,
        id -> Text,
        tracker_id -> Text,
        amount_cents -> BigInt,
        created_at -> BigInt,
    }
}

table! {
    notification_preferences (rowid) {
        rowid -> BigInt,
        business_id -> Text,
        email_enabled -> Bool,
        sms_enabled -> Bool,
        push_enabled -> Bool,
        milestones -> Text,
    }
}
