use crate::usecases::prelude::*;

pub fn coin_balance_of_user<R>(repo: &R, user_id: &Id) -> Result<i64>
where
    R: CoinRepo,
{
    Ok(repo.coin_balance_of_user(user_id)?)
}
