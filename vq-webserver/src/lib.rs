#[macro_use]
extern crate log;

use vq_core::gateways::notify::NotificationGateway;
use vq_db_sqlite::Connections;

mod web;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections.into(), enable_cors, notify_gw, version).await;
}
