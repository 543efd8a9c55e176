use std::{env, process};

use clap::Parser;

use vq_db_sqlite::Connections;
use vq_gateways::{notify::Notify, sendmail::Sendmail};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DB_URL: &str = "vendquest.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;
const DEFAULT_MAIL_FROM: &str = "noreply@vendquest.example";

#[derive(Debug, Parser)]
#[command(name = "vendquest", version, about = "Vending machine engagement platform")]
struct Args {
    /// URL to the database, falls back to DATABASE_URL
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Number of pooled database connections
    #[arg(long, default_value_t = DB_CONNECTION_POOL_SIZE)]
    pool_size: u32,

    /// Sender address for outgoing notification e-mails
    #[arg(long, value_name = "EMAIL")]
    mail_from: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,
}

pub async fn run() {
    let args = Args::parse();

    let db_url = args
        .db_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DB_URL.to_string());
    info!("Opening database {db_url}");
    let connections = match Connections::init(&db_url, args.pool_size) {
        Ok(connections) => connections,
        Err(err) => {
            error!("Could not open the database {db_url}: {err}");
            process::exit(1);
        }
    };
    match connections.exclusive() {
        Ok(db) => vq_db_sqlite::run_embedded_database_migrations(db),
        Err(err) => {
            error!("Could not run database migrations: {err}");
            process::exit(1);
        }
    }

    let mail_from = args
        .mail_from
        .or_else(|| env::var("MAIL_FROM").ok())
        .unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());
    let notify = Notify::new(Sendmail::new(mail_from));

    vq_webserver::run(connections, args.enable_cors, Box::new(notify), VERSION).await;
}
