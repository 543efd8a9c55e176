use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewBusiness {
    pub name: String,
    pub owner_email: String,
}

pub fn create_business<R>(repo: &R, new_business: NewBusiness, now: Timestamp) -> Result<Business>
where
    R: BusinessRepo,
{
    let NewBusiness { name, owner_email } = new_business;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    let business = Business {
        id: Id::new(),
        name: name.trim().to_owned(),
        owner_email,
        created_at: now,
    };
    repo.create_business(&business)?;
    Ok(business)
}

#[derive(Debug, Clone)]
pub struct NewMachine {
    pub business_id: Id,
    pub name: String,
    pub location: Option<String>,
}

pub fn create_machine<R>(repo: &R, new_machine: NewMachine) -> Result<Machine>
where
    R: MachineRepo + BusinessRepo,
{
    let NewMachine {
        business_id,
        name,
        location,
    } = new_machine;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    repo.get_business(&business_id)?;
    let machine = Machine {
        id: Id::new(),
        business_id,
        name: name.trim().to_owned(),
        location,
    };
    repo.create_machine(&machine)?;
    Ok(machine)
}
