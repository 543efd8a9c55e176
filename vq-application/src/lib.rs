#[macro_use]
extern crate log;

mod cast_vote;
mod promo;
mod record_revenue;
mod simulate_scan;
mod spin_wheel;

pub mod prelude {
    pub use super::{cast_vote::*, promo::*, record_revenue::*, simulate_scan::*, spin_wheel::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use vq_core::{
    entities::{
        coin::*, id::*, notification::*, qr_code::*, reward::*, scan::*, spin::*, time::*,
        tracker::*,
    },
    gateways::notify::NotificationGateway,
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use vq_db_sqlite::Connections;
}
