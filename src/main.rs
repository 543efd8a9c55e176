#[macro_use]
extern crate log;

mod cli;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run().await;
}
