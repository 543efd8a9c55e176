use std::collections::HashMap;

use super::*;

impl<'a> VoteRepo for DbConnection<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(self.conn.borrow_mut().sqlite(), vote)
    }
    fn count_votes_of_voter_in_week(&self, voter: &VoterIdentity, week: IsoWeek) -> Result<u64> {
        count_votes_of_voter_in_week(self.conn.borrow_mut().sqlite(), voter, week)
    }
    fn voter_has_voted_for_item_in_week(
        &self,
        voter: &VoterIdentity,
        item_id: &Id,
        week: IsoWeek,
    ) -> Result<bool> {
        voter_has_voted_for_item_in_week(self.conn.borrow_mut().sqlite(), voter, item_id, week)
    }
    fn tally_votes_of_campaign(&self, campaign_id: &Id) -> Result<Vec<VoteTally>> {
        tally_votes_of_campaign(self.conn.borrow_mut().sqlite(), campaign_id)
    }
}

fn create_vote(conn: &mut SqliteConnection, v: &Vote) -> Result<()> {
    let (voter_user_id, voter_ip) = match &v.voter {
        VoterIdentity::User(id) => (Some(id.as_str()), None),
        VoterIdentity::Ip(ip) => (None, Some(ip.as_str())),
    };
    let new_vote = models::NewVote {
        id: v.id.as_str(),
        item_id: v.item_id.as_str(),
        campaign_id: v.campaign_id.as_str(),
        vote_type: v.vote_type.as_ref(),
        voter_user_id,
        voter_ip,
        iso_year: v.cast_in_week.year,
        iso_week: v.cast_in_week.week as i16,
        created_at: v.created_at.as_secs(),
    };
    diesel::insert_into(schema::votes::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn count_votes_of_voter_in_week(
    conn: &mut SqliteConnection,
    voter: &VoterIdentity,
    week: IsoWeek,
) -> Result<u64> {
    use schema::votes::dsl;
    let week_filter = dsl::votes
        .filter(dsl::iso_year.eq(week.year))
        .filter(dsl::iso_week.eq(week.week as i16));
    let count = match voter {
        VoterIdentity::User(id) => week_filter
            .filter(dsl::voter_user_id.eq(id.as_str()))
            .count()
            .get_result::<i64>(conn),
        VoterIdentity::Ip(ip) => week_filter
            .filter(dsl::voter_ip.eq(ip.as_str()))
            .count()
            .get_result::<i64>(conn),
    }
    .map_err(from_diesel_err)?;
    Ok(count as u64)
}

fn voter_has_voted_for_item_in_week(
    conn: &mut SqliteConnection,
    voter: &VoterIdentity,
    item_id: &Id,
    week: IsoWeek,
) -> Result<bool> {
    use schema::votes::dsl;
    let item_week_filter = dsl::votes
        .filter(dsl::item_id.eq(item_id.as_str()))
        .filter(dsl::iso_year.eq(week.year))
        .filter(dsl::iso_week.eq(week.week as i16));
    let count = match voter {
        VoterIdentity::User(id) => item_week_filter
            .filter(dsl::voter_user_id.eq(id.as_str()))
            .count()
            .get_result::<i64>(conn),
        VoterIdentity::Ip(ip) => item_week_filter
            .filter(dsl::voter_ip.eq(ip.as_str()))
            .count()
            .get_result::<i64>(conn),
    }
    .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn tally_votes_of_campaign(conn: &mut SqliteConnection, campaign_id: &Id) -> Result<Vec<VoteTally>> {
    use schema::votes::dsl;
    let rows = dsl::votes
        .filter(dsl::campaign_id.eq(campaign_id.as_str()))
        .select((dsl::item_id, dsl::vote_type))
        .order(dsl::rowid.asc())
        .load::<(String, String)>(conn)
        .map_err(from_diesel_err)?;
    let mut tallies: Vec<VoteTally> = Vec::new();
    let mut index_by_item: HashMap<String, usize> = HashMap::new();
    for (item_id, vote_type) in rows {
        let vote_type = VoteType::parse(&vote_type).map_err(|_| {
            repo::Error::Other(anyhow!("Unexpected vote type in database: {vote_type}"))
        })?;
        let idx = *index_by_item.entry(item_id.clone()).or_insert_with(|| {
            tallies.push(VoteTally {
                item_id: item_id.into(),
                votes_in: 0,
                votes_out: 0,
            });
            tallies.len() - 1
        });
        match vote_type {
            VoteType::VoteIn => tallies[idx].votes_in += 1,
            VoteType::VoteOut => tallies[idx].votes_out += 1,
        }
    }
    Ok(tallies)
}
