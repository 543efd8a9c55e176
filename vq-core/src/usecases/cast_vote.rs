use crate::usecases::prelude::*;

/// Accepted votes per identity per ISO week. Fixed product constant.
pub const WEEKLY_VOTE_LIMIT: u64 = 2;

/// QR coins credited to an authenticated voter for each accepted vote.
pub const VOTE_REWARD_COINS: i64 = 30;

pub const VOTE_COIN_REASON: &str = "Vote cast for item";

#[derive(Debug, Clone)]
pub struct NewVote {
    pub voter: VoterIdentity,
    pub campaign_id: Id,
    pub item_id: Id,
    pub vote_type: VoteType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub vote_id: Id,
    pub coins_awarded: i64,
    pub votes_remaining_this_week: u64,
}

/// Validates and records a single vote. Must run inside one database
/// transaction so that the quota check and the insert are atomic.
pub fn cast_vote<R>(repo: &R, new_vote: NewVote, now: Timestamp) -> Result<VoteReceipt>
where
    R: CampaignRepo + ItemRepo + VoteRepo + CoinRepo,
{
    let NewVote {
        voter,
        campaign_id,
        item_id,
        vote_type,
    } = new_vote;

    // Campaign validity comes first; an invalid campaign is a distinct
    // rejection from any quota condition.
    let campaign = repo.get_campaign(&campaign_id)?;
    if !campaign.is_active() {
        return Err(Error::CampaignNotActive);
    }
    let item = repo.get_item(&item_id)?;
    if campaign.voting_list_id.as_ref() != Some(&item.list_id) {
        return Err(Error::ItemNotInCampaign);
    }

    let week = IsoWeek::containing(now);
    if repo.voter_has_voted_for_item_in_week(&voter, &item.id, week)? {
        return Err(Error::AlreadyVotedForItem);
    }
    let votes_cast = repo.count_votes_of_voter_in_week(&voter, week)?;
    if votes_cast >= WEEKLY_VOTE_LIMIT {
        return Err(Error::WeeklyVoteLimitReached);
    }

    let vote = Vote {
        id: Id::new(),
        item_id,
        campaign_id,
        vote_type,
        voter: voter.clone(),
        created_at: now,
        cast_in_week: week,
    };
    repo.create_vote(&vote)?;

    let coins_awarded = match voter.user_id() {
        Some(user_id) => {
            repo.credit_coins(&CoinTransaction {
                id: Id::new(),
                user_id: user_id.clone(),
                amount: VOTE_REWARD_COINS,
                reason: VOTE_COIN_REASON.into(),
                created_at: now,
            })?;
            VOTE_REWARD_COINS
        }
        None => 0,
    };

    Ok(VoteReceipt {
        vote_id: vote.id,
        coins_awarded,
        votes_remaining_this_week: WEEKLY_VOTE_LIMIT - (votes_cast + 1),
    })
}
