use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewVotingList {
    pub business_id: Id,
    pub name: String,
}

pub fn create_voting_list<R>(repo: &R, new_list: NewVotingList) -> Result<VotingList>
where
    R: VotingListRepo + BusinessRepo,
{
    let NewVotingList { business_id, name } = new_list;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    // Fail early for unknown tenants.
    repo.get_business(&business_id)?;
    let list = VotingList {
        id: Id::new(),
        business_id,
        name: name.trim().to_owned(),
    };
    repo.create_voting_list(&list)?;
    Ok(list)
}

#[derive(Debug, Clone)]
pub struct NewItem {
    pub list_id: Id,
    pub name: String,
    pub category: Option<String>,
    pub retail_price_cents: i64,
    pub inventory: i64,
}

pub fn create_item<R>(repo: &R, new_item: NewItem) -> Result<Item>
where
    R: ItemRepo + VotingListRepo,
{
    let NewItem {
        list_id,
        name,
        category,
        retail_price_cents,
        inventory,
    } = new_item;
    if name.trim().is_empty() {
        return Err(Error::EmptyName);
    }
    if retail_price_cents < 0 || inventory < 0 {
        return Err(Error::InvalidAmount);
    }
    repo.get_voting_list(&list_id)?;
    let item = Item {
        id: Id::new(),
        list_id,
        name: name.trim().to_owned(),
        category,
        retail_price_cents,
        inventory,
    };
    repo.create_item(&item)?;
    Ok(item)
}

pub fn search_items<R>(
    repo: &R,
    query: &ItemQuery,
    pagination: &Pagination,
) -> Result<Vec<Item>>
where
    R: ItemRepo,
{
    Ok(repo.search_items(query, pagination)?)
}

pub fn update_item_inventory<R>(repo: &R, item_id: &Id, inventory: i64) -> Result<Item>
where
    R: ItemRepo,
{
    if inventory < 0 {
        return Err(Error::InvalidAmount);
    }
    // Resolve first so a missing item surfaces as NotFound instead of
    // a silent no-op update.
    repo.get_item(item_id)?;
    repo.set_item_inventory(item_id, inventory)?;
    Ok(repo.get_item(item_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::{fixtures, MockDb};

    #[test]
    fn reject_empty_item_name() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let err = create_item(
            &db,
            NewItem {
                list_id: fx.list_id,
                name: "   ".into(),
                category: None,
                retail_price_cents: 100,
                inventory: 0,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyName));
    }

    #[test]
    fn reject_negative_inventory_update() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let err = update_item_inventory(&db, &fx.item_ids[0], -1).unwrap_err();
        assert!(matches!(err, Error::InvalidAmount));
    }

    #[test]
    fn inventory_update_is_persisted() {
        let db = MockDb::default();
        let fx = fixtures(&db);
        let item = update_item_inventory(&db, &fx.item_ids[0], 17).unwrap();
        assert_eq!(item.inventory, 17);
    }
}
