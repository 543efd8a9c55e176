use super::*;

#[post("/wheels/<id>/spin")]
pub fn post_spin(
    db: sqlite::Connections,
    client_ip: ClientIp,
    id: String,
) -> Result<json::SpinResponse> {
    let mut rng = rand::thread_rng();
    let flows::SpinOutcome { result, reward } =
        flows::spin_wheel(&db, &id.into(), client_ip.as_str(), &mut rng)?;
    Ok(Json(json::SpinResponse {
        spun_at: result.created_at.as_secs(),
        result_id: result.id.into(),
        reward: reward.into(),
    }))
}

#[get("/wheels/<id>/rewards")]
pub fn get_wheel_rewards(db: sqlite::Connections, id: String) -> Result<Vec<json::Reward>> {
    let connection = db.shared()?;
    let rewards = usecases::load_active_rewards(&connection.inner(), &id.into())?;
    Ok(Json(rewards.into_iter().map(Into::into).collect()))
}

#[get("/wheels/<id>/stats")]
pub fn get_wheel_stats(db: sqlite::Connections, id: String) -> Result<json::SpinStats> {
    let connection = db.shared()?;
    let stats = usecases::wheel_spin_stats(&connection.inner(), &id.into())?;
    Ok(Json(json::SpinStats {
        total_spins: stats.total_spins,
        wins_by_reward: stats
            .wins_by_reward
            .into_iter()
            .map(|(reward_id, wins)| json::RewardWins {
                reward_id: reward_id.into(),
                wins,
            })
            .collect(),
    }))
}
