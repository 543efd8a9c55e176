use super::*;

#[post("/votes", format = "application/json", data = "<vote>")]
pub fn post_vote(
    db: sqlite::Connections,
    account: Option<Account>,
    client_ip: ClientIp,
    vote: JsonResult<json::VoteRequest>,
) -> Result<json::VoteReceipt> {
    let vote = vote?.into_inner();
    let vote_type = VoteType::parse(&vote.vote_type).map_err(ParameterError::from)?;
    // A stale session cookie degrades to the anonymous IP identity
    // instead of rejecting the vote.
    let voter = match account {
        Some(account) => {
            let connection = db.shared()?;
            let voter = match connection.inner().try_get_user_by_email(account.email())? {
                Some(user) => VoterIdentity::User(user.id),
                None => VoterIdentity::Ip(client_ip.into_inner()),
            };
            voter
        }
        None => VoterIdentity::Ip(client_ip.into_inner()),
    };
    let receipt = flows::cast_vote(
        &db,
        usecases::NewVote {
            voter,
            campaign_id: vote.campaign_id.into(),
            item_id: vote.item_id.into(),
            vote_type,
        },
    )?;
    Ok(Json(json::VoteReceipt {
        vote_id: receipt.vote_id.into(),
        coins_awarded: receipt.coins_awarded,
        votes_remaining_this_week: receipt.votes_remaining_this_week,
    }))
}
