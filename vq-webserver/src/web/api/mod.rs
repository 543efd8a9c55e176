use std::{fmt::Display, result};

use rocket::{
    self, get,
    http::{Cookie, CookieJar, Status},
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, sqlite};
use vq_application::prelude as flows;
use vq_boundary as json;
use vq_core::{
    progress::Progress,
    repositories::{ItemQuery, ItemRepo, Pagination, TrackerRepo, UserRepo, VotingListRepo},
    usecases::{self, Error as ParameterError},
};
use vq_entities::{
    id::Id,
    tracker::PizzaTracker,
    user::Role,
    vote::{VoteType, VoterIdentity},
};

mod campaigns;
mod error;
mod items;
mod notifications;
mod scan;
mod spins;
mod trackers;
mod users;
mod util;
mod votes;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   scan simulator   --- //
        scan::post_scan,
        // ---   votes   --- //
        votes::post_vote,
        campaigns::get_campaign_results,
        // ---   spin wheels   --- //
        spins::post_spin,
        spins::get_wheel_rewards,
        spins::get_wheel_stats,
        // ---   pizza trackers   --- //
        trackers::get_tracker,
        trackers::post_revenue,
        trackers::post_promo_click,
        notifications::get_notification_preferences,
        notifications::put_notification_preferences,
        // ---   items   --- //
        items::get_items,
        items::post_item_inventory,
        // ---   users   --- //
        users::post_login,
        users::post_logout,
        users::get_current_user_coins,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = json::Error {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn tracker_status(tracker: PizzaTracker) -> json::TrackerStatus {
    let percent = tracker.progress_percent();
    json::TrackerStatus::from_tracker(tracker, percent)
}
