// NOTE:
// All columns with the `_at` postfix are stored as unix timestamps
// in seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use vq_core::{
    entities::{
        business::*, campaign::*, coin::*, id::*, item::*, machine::*, notification::*,
        qr_code::*, reward::*, scan::*, spin::*, time::*, tracker::*, user::*, vote::*, week::*,
    },
    repositories::{self as repo, *},
};

use super::{models, schema, DbConnection, SqliteConnection};

mod business;
mod campaign;
mod coin;
mod item;
mod machine;
mod notification;
mod qr_code;
mod scan_log;
mod spin;
mod tracker;
mod user;
mod vote;
mod voting_list;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}
