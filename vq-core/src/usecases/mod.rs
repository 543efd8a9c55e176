mod analytics;
mod authorize;
mod campaigns;
mod cast_vote;
mod catalog;
mod coins;
mod draw_reward;
mod error;
mod notifications;
mod qr_codes;
mod resolve_qr;
mod rewards;
mod tenants;
mod track_progress;
mod trackers;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    analytics::*, authorize::*, campaigns::*, cast_vote::*, catalog::*, coins::*, draw_reward::*,
    error::Error, notifications::*, qr_codes::*, resolve_qr::*, rewards::*, tenants::*,
    track_progress::*, trackers::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{
            business::*, campaign::*, coin::*, id::*, item::*, machine::*, notification::*,
            qr_code::*, reward::*, scan::*, spin::*, time::*, tracker::*, user::*, vote::*,
            week::*,
        },
        repositories::*,
    };
}
