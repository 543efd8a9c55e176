use super::*;

impl<'a> MachineRepo for DbConnection<'a> {
    fn create_machine(&self, machine: &Machine) -> Result<()> {
        create_machine(self.conn.borrow_mut().sqlite(), machine)
    }
    fn get_machine(&self, id: &Id) -> Result<Machine> {
        get_machine(self.conn.borrow_mut().sqlite(), id)
    }
    fn machines_of_business(&self, business_id: &Id) -> Result<Vec<Machine>> {
        machines_of_business(self.conn.borrow_mut().sqlite(), business_id)
    }
}

fn create_machine(conn: &mut SqliteConnection, m: &Machine) -> Result<()> {
    let new_machine = models::NewMachine {
        id: m.id.as_str(),
        business_id: m.business_id.as_str(),
        name: &m.name,
        location: m.location.as_deref(),
    };
    diesel::insert_into(schema::machines::table)
        .values(&new_machine)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_machine(conn: &mut SqliteConnection, id: &Id) -> Result<Machine> {
    use schema::machines::dsl;
    let entity = dsl::machines
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::MachineEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(machine_from_entity(entity))
}

fn machines_of_business(conn: &mut SqliteConnection, business_id: &Id) -> Result<Vec<Machine>> {
    use schema::machines::dsl;
    let entities = dsl::machines
        .filter(dsl::business_id.eq(business_id.as_str()))
        .order(dsl::rowid.asc())
        .load::<models::MachineEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities.into_iter().map(machine_from_entity).collect())
}

fn machine_from_entity(entity: models::MachineEntity) -> Machine {
    let models::MachineEntity {
        rowid: _,
        id,
        business_id,
        name,
        location,
    } = entity;
    Machine {
        id: id.into(),
        business_id: business_id.into(),
        name,
        location,
    }
}
