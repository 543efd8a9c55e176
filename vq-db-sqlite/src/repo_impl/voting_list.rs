use super::*;

impl<'a> VotingListRepo for DbConnection<'a> {
    fn create_voting_list(&self, list: &VotingList) -> Result<()> {
        create_voting_list(self.conn.borrow_mut().sqlite(), list)
    }
    fn get_voting_list(&self, id: &Id) -> Result<VotingList> {
        get_voting_list(self.conn.borrow_mut().sqlite(), id)
    }
}

fn create_voting_list(conn: &mut SqliteConnection, list: &VotingList) -> Result<()> {
    let new_list = models::NewVotingList {
        id: list.id.as_str(),
        business_id: list.business_id.as_str(),
        name: &list.name,
    };
    diesel::insert_into(schema::voting_lists::table)
        .values(&new_list)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_voting_list(conn: &mut SqliteConnection, id: &Id) -> Result<VotingList> {
    use schema::voting_lists::dsl;
    let entity = dsl::voting_lists
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::VotingListEntity>(conn)
        .map_err(from_diesel_err)?;
    let models::VotingListEntity {
        rowid: _,
        id,
        business_id,
        name,
    } = entity;
    Ok(VotingList {
        id: id.into(),
        business_id: business_id.into(),
        name,
    })
}
