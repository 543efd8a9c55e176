#[macro_use]
extern crate log;

pub mod notify;
pub mod sendmail;
mod user_communication;
