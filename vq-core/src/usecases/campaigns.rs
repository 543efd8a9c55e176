use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewCampaign {
    pub business_id: Id,
    pub name: String,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
    pub voting_list_id: Option<Id>,
}

/// Campaigns start in draft; votes only resolve against active ones.
pub fn create_campaign<R>(repo: &R, new_campaign: NewCampaign) -> Result<Campaign>
where
    R: CampaignRepo + BusinessRepo + VotingListRepo,
{
    let NewCampaign {
        business_id,
        name,
        starts_at,
        ends_at,
        voting_list_id,
    } = new_campaign;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    if ends_at < starts_at {
        return Err(Error::EndDateBeforeStart);
    }
    repo.get_business(&business_id)?;
    if let Some(list_id) = &voting_list_id {
        let list = repo.get_voting_list(list_id)?;
        if list.business_id != business_id {
            return Err(Error::Forbidden);
        }
    }
    let campaign = Campaign {
        id: Id::new(),
        business_id,
        name: name.trim().to_owned(),
        status: CampaignStatus::Draft,
        starts_at,
        ends_at,
        voting_list_id,
    };
    repo.create_campaign(&campaign)?;
    Ok(campaign)
}

pub fn activate_campaign<R>(repo: &R, campaign_id: &Id) -> Result<Campaign>
where
    R: CampaignRepo,
{
    repo.get_campaign(campaign_id)?;
    repo.update_campaign_status(campaign_id, CampaignStatus::Active)?;
    Ok(repo.get_campaign(campaign_id)?)
}
