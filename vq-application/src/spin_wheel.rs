use rand::Rng;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub result: SpinResult,
    pub reward: Reward,
}

/// Draws a winner and persists the audit record in the same
/// transaction. The winner is only revealed to the caller after the
/// commit; a wheel without active rewards leaves no audit row.
pub fn spin_wheel<G>(
    connections: &sqlite::Connections,
    wheel_id: &Id,
    client_ip: &str,
    rng: &mut G,
) -> super::Result<SpinOutcome>
where
    G: Rng,
{
    let mut connection = connections.exclusive()?;
    let outcome = connection.transaction(|conn| {
        let rewards = usecases::load_active_rewards(conn, wheel_id)?;
        let reward = usecases::draw_reward(&rewards, rng)
            .ok_or(usecases::Error::NoActiveRewards)?
            .clone();
        let result = SpinResult {
            id: Id::new(),
            wheel_id: wheel_id.clone(),
            reward_id: reward.id.clone(),
            user_ip: client_ip.to_owned(),
            created_at: Timestamp::now(),
        };
        conn.create_spin_result(&result)?;
        Ok::<_, usecases::Error>(SpinOutcome { result, reward })
    })?;
    Ok(outcome)
}
