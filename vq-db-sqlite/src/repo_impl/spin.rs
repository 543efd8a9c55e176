use super::*;

impl<'a> SpinWheelRepo for DbConnection<'a> {
    fn create_spin_wheel(&self, wheel: &SpinWheel) -> Result<()> {
        create_spin_wheel(self.conn.borrow_mut().sqlite(), wheel)
    }
    fn get_spin_wheel(&self, id: &Id) -> Result<SpinWheel> {
        get_spin_wheel(self.conn.borrow_mut().sqlite(), id)
    }
}

impl<'a> RewardRepo for DbConnection<'a> {
    fn create_reward(&self, reward: &Reward) -> Result<()> {
        create_reward(self.conn.borrow_mut().sqlite(), reward)
    }
    fn active_rewards_of_wheel(&self, wheel_id: &Id) -> Result<Vec<Reward>> {
        active_rewards_of_wheel(self.conn.borrow_mut().sqlite(), wheel_id)
    }
}

impl<'a> SpinResultRepo for DbConnection<'a> {
    fn create_spin_result(&self, result: &SpinResult) -> Result<()> {
        create_spin_result(self.conn.borrow_mut().sqlite(), result)
    }
    fn spin_results_of_wheel(&self, wheel_id: &Id) -> Result<Vec<SpinResult>> {
        spin_results_of_wheel(self.conn.borrow_mut().sqlite(), wheel_id)
    }
    fn count_spin_results_by_reward(&self, wheel_id: &Id) -> Result<Vec<(Id, u64)>> {
        count_spin_results_by_reward(self.conn.borrow_mut().sqlite(), wheel_id)
    }
}

fn create_spin_wheel(conn: &mut SqliteConnection, w: &SpinWheel) -> Result<()> {
    let new_wheel = models::NewSpinWheel {
        id: w.id.as_str(),
        business_id: w.business_id.as_str(),
        name: &w.name,
    };
    diesel::insert_into(schema::spin_wheels::table)
        .values(&new_wheel)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_spin_wheel(conn: &mut SqliteConnection, id: &Id) -> Result<SpinWheel> {
    use schema::spin_wheels::dsl;
    let entity = dsl::spin_wheels
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::SpinWheelEntity>(conn)
        .map_err(from_diesel_err)?;
    let models::SpinWheelEntity {
        rowid: _,
        id,
        business_id,
        name,
    } = entity;
    Ok(SpinWheel {
        id: id.into(),
        business_id: business_id.into(),
        name,
    })
}

fn create_reward(conn: &mut SqliteConnection, r: &Reward) -> Result<()> {
    let new_reward = models::NewReward {
        id: r.id.as_str(),
        wheel_id: r.wheel_id.as_str(),
        name: &r.name,
        rarity_level: u8::from(r.rarity) as i16,
        active: r.active,
        code: r.code.as_deref(),
        link: r.link.as_deref(),
    };
    diesel::insert_into(schema::rewards::table)
        .values(&new_reward)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

// The insertion order of the rewards is significant for
// the draw's deterministic tie-break.
fn active_rewards_of_wheel(conn: &mut SqliteConnection, wheel_id: &Id) -> Result<Vec<Reward>> {
    use schema::rewards::dsl;
    let entities = dsl::rewards
        .filter(dsl::wheel_id.eq(wheel_id.as_str()))
        .filter(dsl::active.eq(true))
        .order(dsl::rowid.asc())
        .load::<models::RewardEntity>(conn)
        .map_err(from_diesel_err)?;
    entities.into_iter().map(reward_from_entity).collect()
}

fn reward_from_entity(entity: models::RewardEntity) -> Result<Reward> {
    let models::RewardEntity {
        rowid: _,
        id,
        wheel_id,
        name,
        rarity_level,
        active,
        code,
        link,
    } = entity;
    let rarity = RarityLevel::new(rarity_level as u8).ok_or_else(|| {
        repo::Error::Other(anyhow!(
            "Unexpected rarity level in database: {rarity_level}"
        ))
    })?;
    Ok(Reward {
        id: id.into(),
        wheel_id: wheel_id.into(),
        name,
        rarity,
        active,
        code,
        link,
    })
}

fn create_spin_result(conn: &mut SqliteConnection, r: &SpinResult) -> Result<()> {
    let new_result = models::NewSpinResult {
        id: r.id.as_str(),
        wheel_id: r.wheel_id.as_str(),
        reward_id: r.reward_id.as_str(),
        user_ip: &r.user_ip,
        created_at: r.created_at.as_secs(),
    };
    diesel::insert_into(schema::spin_results::table)
        .values(&new_result)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn spin_results_of_wheel(conn: &mut SqliteConnection, wheel_id: &Id) -> Result<Vec<SpinResult>> {
    use schema::spin_results::dsl;
    let entities = dsl::spin_results
        .filter(dsl::wheel_id.eq(wheel_id.as_str()))
        .order(dsl::rowid.asc())
        .load::<models::SpinResultEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities
        .into_iter()
        .map(|entity| {
            let models::SpinResultEntity {
                rowid: _,
                id,
                wheel_id,
                reward_id,
                user_ip,
                created_at,
            } = entity;
            SpinResult {
                id: id.into(),
                wheel_id: wheel_id.into(),
                reward_id: reward_id.into(),
                user_ip,
                created_at: Timestamp::from_secs(created_at),
            }
        })
        .collect())
}

fn count_spin_results_by_reward(
    conn: &mut SqliteConnection,
    wheel_id: &Id,
) -> Result<Vec<(Id, u64)>> {
    use diesel::dsl::count_star;
    use schema::spin_results::dsl;
    let counts = dsl::spin_results
        .filter(dsl::wheel_id.eq(wheel_id.as_str()))
        .group_by(dsl::reward_id)
        .select((dsl::reward_id, count_star()))
        .load::<(String, i64)>(conn)
        .map_err(from_diesel_err)?;
    Ok(counts
        .into_iter()
        .map(|(reward_id, count)| (reward_id.into(), count as u64))
        .collect())
}
