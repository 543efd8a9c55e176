use super::*;

impl<'a> CampaignRepo for DbConnection<'a> {
    fn create_campaign(&self, campaign: &Campaign) -> Result<()> {
        create_campaign(self.conn.borrow_mut().sqlite(), campaign)
    }
    fn get_campaign(&self, id: &Id) -> Result<Campaign> {
        get_campaign(self.conn.borrow_mut().sqlite(), id)
    }
    fn campaigns_of_business(&self, business_id: &Id) -> Result<Vec<Campaign>> {
        campaigns_of_business(self.conn.borrow_mut().sqlite(), business_id)
    }
    fn update_campaign_status(&self, id: &Id, status: CampaignStatus) -> Result<()> {
        update_campaign_status(self.conn.borrow_mut().sqlite(), id, status)
    }
}

fn create_campaign(conn: &mut SqliteConnection, c: &Campaign) -> Result<()> {
    let new_campaign = models::NewCampaign {
        id: c.id.as_str(),
        business_id: c.business_id.as_str(),
        name: &c.name,
        status: c.status.as_ref(),
        starts_at: c.starts_at.as_secs(),
        ends_at: c.ends_at.as_secs(),
        voting_list_id: c.voting_list_id.as_ref().map(Id::as_str),
    };
    diesel::insert_into(schema::campaigns::table)
        .values(&new_campaign)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_campaign(conn: &mut SqliteConnection, id: &Id) -> Result<Campaign> {
    use schema::campaigns::dsl;
    let entity = dsl::campaigns
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::CampaignEntity>(conn)
        .map_err(from_diesel_err)?;
    campaign_from_entity(entity)
}

fn campaigns_of_business(conn: &mut SqliteConnection, business_id: &Id) -> Result<Vec<Campaign>> {
    use schema::campaigns::dsl;
    let entities = dsl::campaigns
        .filter(dsl::business_id.eq(business_id.as_str()))
        .order(dsl::rowid.asc())
        .load::<models::CampaignEntity>(conn)
        .map_err(from_diesel_err)?;
    entities.into_iter().map(campaign_from_entity).collect()
}

fn update_campaign_status(
    conn: &mut SqliteConnection,
    id: &Id,
    status: CampaignStatus,
) -> Result<()> {
    use schema::campaigns::dsl;
    let updated = diesel::update(dsl::campaigns.filter(dsl::id.eq(id.as_str())))
        .set(dsl::status.eq(status.as_ref()))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn campaign_from_entity(entity: models::CampaignEntity) -> Result<Campaign> {
    let models::CampaignEntity {
        rowid: _,
        id,
        business_id,
        name,
        status,
        starts_at,
        ends_at,
        voting_list_id,
    } = entity;
    let status = CampaignStatus::parse(&status).map_err(|_| {
        repo::Error::Other(anyhow!("Unexpected campaign status in database: {status}"))
    })?;
    Ok(Campaign {
        id: id.into(),
        business_id: business_id.into(),
        name,
        status,
        starts_at: Timestamp::from_secs(starts_at),
        ends_at: Timestamp::from_secs(ends_at),
        voting_list_id: voting_list_id.map(Into::into),
    })
}
