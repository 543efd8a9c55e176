use super::*;

/// Runs the quota check and the vote insert in one transaction so a
/// rejected vote never leaves a partial write behind.
pub fn cast_vote(
    connections: &sqlite::Connections,
    new_vote: usecases::NewVote,
) -> super::Result<usecases::VoteReceipt> {
    let mut connection = connections.exclusive()?;
    let receipt = connection.transaction(|conn| usecases::cast_vote(conn, new_vote, Timestamp::now()))?;
    Ok(receipt)
}
