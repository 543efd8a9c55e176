use super::*;

impl<'a> ScanLogRepo for DbConnection<'a> {
    fn create_scan_log(&self, log: &ScanLog) -> Result<()> {
        create_scan_log(self.conn.borrow_mut().sqlite(), log)
    }
}

fn create_scan_log(conn: &mut SqliteConnection, log: &ScanLog) -> Result<()> {
    let new_log = models::NewScanLog {
        id: log.id.as_str(),
        admin_user_id: log.admin_user_id.as_str(),
        raw_input: &log.raw_input,
        outcome: &log.outcome,
        response: &log.response,
        elapsed_millis: log.elapsed_millis as i64,
        created_at: log.created_at.as_secs(),
    };
    diesel::insert_into(schema::scan_logs::table)
        .values(&new_log)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}
