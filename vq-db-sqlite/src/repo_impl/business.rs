use super::*;

impl<'a> BusinessRepo for DbConnection<'a> {
    fn create_business(&self, business: &Business) -> Result<()> {
        create_business(self.conn.borrow_mut().sqlite(), business)
    }
    fn get_business(&self, id: &Id) -> Result<Business> {
        get_business(self.conn.borrow_mut().sqlite(), id)
    }
    fn count_businesses(&self) -> Result<usize> {
        count_businesses(self.conn.borrow_mut().sqlite())
    }
}

fn create_business(conn: &mut SqliteConnection, b: &Business) -> Result<()> {
    let new_business = models::NewBusiness {
        id: b.id.as_str(),
        name: &b.name,
        owner_email: &b.owner_email,
        created_at: b.created_at.as_secs(),
    };
    diesel::insert_into(schema::businesses::table)
        .values(&new_business)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_business(conn: &mut SqliteConnection, id: &Id) -> Result<Business> {
    use schema::businesses::dsl;
    let entity = dsl::businesses
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::BusinessEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(business_from_entity(entity))
}

fn count_businesses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::businesses::dsl;
    let count = dsl::businesses
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}

fn business_from_entity(entity: models::BusinessEntity) -> Business {
    let models::BusinessEntity {
        rowid: _,
        id,
        name,
        owner_email,
        created_at,
    } = entity;
    Business {
        id: id.into(),
        name,
        owner_email,
        created_at: Timestamp::from_secs(created_at),
    }
}
