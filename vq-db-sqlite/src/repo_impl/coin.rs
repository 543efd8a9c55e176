use super::*;

impl<'a> CoinRepo for DbConnection<'a> {
    fn credit_coins(&self, tx: &CoinTransaction) -> Result<()> {
        credit_coins(self.conn.borrow_mut().sqlite(), tx)
    }
    fn coin_balance_of_user(&self, user_id: &Id) -> Result<i64> {
        coin_balance_of_user(self.conn.borrow_mut().sqlite(), user_id)
    }
}

fn credit_coins(conn: &mut SqliteConnection, tx: &CoinTransaction) -> Result<()> {
    let new_tx = models::NewCoinTransaction {
        id: tx.id.as_str(),
        user_id: tx.user_id.as_str(),
        amount: tx.amount,
        reason: &tx.reason,
        created_at: tx.created_at.as_secs(),
    };
    diesel::insert_into(schema::coin_transactions::table)
        .values(&new_tx)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn coin_balance_of_user(conn: &mut SqliteConnection, user_id: &Id) -> Result<i64> {
    use diesel::dsl::sql;
    use diesel::sql_types::{BigInt, Nullable};
    use schema::coin_transactions::dsl;
    let balance = dsl::coin_transactions
        .filter(dsl::user_id.eq(user_id.as_str()))
        .select(sql::<Nullable<BigInt>>("SUM(amount)"))
        .get_result::<Option<i64>>(conn)
        .map_err(from_diesel_err)?;
    Ok(balance.unwrap_or(0))
}
