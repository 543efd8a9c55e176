use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewSpinWheel {
    pub business_id: Id,
    pub name: String,
}

pub fn create_spin_wheel<R>(repo: &R, new_wheel: NewSpinWheel) -> Result<SpinWheel>
where
    R: SpinWheelRepo + BusinessRepo,
{
    let NewSpinWheel { business_id, name } = new_wheel;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    repo.get_business(&business_id)?;
    let wheel = SpinWheel {
        id: Id::new(),
        business_id,
        name: name.trim().to_owned(),
    };
    repo.create_spin_wheel(&wheel)?;
    Ok(wheel)
}

#[derive(Debug, Clone)]
pub struct NewReward {
    pub wheel_id: Id,
    pub name: String,
    pub rarity_level: u8,
    pub code: Option<String>,
    pub link: Option<String>,
}

pub fn create_reward<R>(repo: &R, new_reward: NewReward) -> Result<Reward>
where
    R: RewardRepo + SpinWheelRepo,
{
    let NewReward {
        wheel_id,
        name,
        rarity_level,
        code,
        link,
    } = new_reward;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    let rarity = RarityLevel::new(rarity_level).ok_or(Error::InvalidRarity)?;
    repo.get_spin_wheel(&wheel_id)?;
    let reward = Reward {
        id: Id::new(),
        wheel_id,
        name: name.trim().to_owned(),
        rarity,
        active: true,
        code,
        link,
    };
    repo.create_reward(&reward)?;
    Ok(reward)
}

pub fn load_active_rewards<R>(repo: &R, wheel_id: &Id) -> Result<Vec<Reward>>
where
    R: RewardRepo + SpinWheelRepo,
{
    repo.get_spin_wheel(wheel_id)?;
    Ok(repo.active_rewards_of_wheel(wheel_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::{fixtures, MockDb};

    #[test]
    fn reject_out_of_range_rarity() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        for rarity_level in [0, 11] {
            let err = create_reward(
                &db,
                NewReward {
                    wheel_id: fx.wheel_id.clone(),
                    name: "free soda".into(),
                    rarity_level,
                    code: None,
                    link: None,
                },
            )
            .unwrap_err();
            assert!(matches!(err, Error::InvalidRarity));
        }
    }

    #[test]
    fn inactive_rewards_are_excluded_from_the_pool() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let active = create_reward(
            &db,
            NewReward {
                wheel_id: fx.wheel_id.clone(),
                name: "sticker".into(),
                rarity_level: 3,
                code: None,
                link: None,
            },
        )
        .unwrap();
        db.deactivate_reward_for_test(&active.id);
        assert!(load_active_rewards(&db, &fx.wheel_id).unwrap().is_empty());
    }
}
