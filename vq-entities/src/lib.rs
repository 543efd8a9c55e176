pub mod business;
#[cfg(feature = "builders")]
pub mod builders;
pub mod campaign;
pub mod coin;
pub mod id;
pub mod item;
pub mod machine;
pub mod notification;
pub mod qr_code;
pub mod reward;
pub mod scan;
pub mod spin;
pub mod time;
pub mod tracker;
pub mod user;
pub mod vote;
pub mod week;
