use super::*;

impl<'a> ItemRepo for DbConnection<'a> {
    fn create_item(&self, item: &Item) -> Result<()> {
        create_item(self.conn.borrow_mut().sqlite(), item)
    }
    fn get_item(&self, id: &Id) -> Result<Item> {
        get_item(self.conn.borrow_mut().sqlite(), id)
    }
    fn items_of_list(&self, list_id: &Id) -> Result<Vec<Item>> {
        items_of_list(self.conn.borrow_mut().sqlite(), list_id)
    }
    fn search_items(&self, query: &ItemQuery, pagination: &Pagination) -> Result<Vec<Item>> {
        search_items(self.conn.borrow_mut().sqlite(), query, pagination)
    }
    fn set_item_inventory(&self, id: &Id, inventory: i64) -> Result<()> {
        set_item_inventory(self.conn.borrow_mut().sqlite(), id, inventory)
    }
}

fn create_item(conn: &mut SqliteConnection, item: &Item) -> Result<()> {
    let new_item = models::NewItem {
        id: item.id.as_str(),
        list_id: item.list_id.as_str(),
        name: &item.name,
        category: item.category.as_deref(),
        retail_price_cents: item.retail_price_cents,
        inventory: item.inventory,
    };
    diesel::insert_into(schema::items::table)
        .values(&new_item)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_item(conn: &mut SqliteConnection, id: &Id) -> Result<Item> {
    use schema::items::dsl;
    let entity = dsl::items
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::ItemEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(item_from_entity(entity))
}

fn items_of_list(conn: &mut SqliteConnection, list_id: &Id) -> Result<Vec<Item>> {
    use schema::items::dsl;
    let entities = dsl::items
        .filter(dsl::list_id.eq(list_id.as_str()))
        .order(dsl::rowid.asc())
        .load::<models::ItemEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities.into_iter().map(item_from_entity).collect())
}

fn search_items(
    conn: &mut SqliteConnection,
    query: &ItemQuery,
    pagination: &Pagination,
) -> Result<Vec<Item>> {
    use schema::items::dsl;
    let mut q = dsl::items.into_boxed();
    if let Some(text) = &query.text {
        q = q.filter(dsl::name.like(format!("%{text}%")));
    }
    if let Some(category) = &query.category {
        q = q.filter(dsl::category.eq(category.clone()));
    }
    if let Some(list_id) = &query.list_id {
        q = q.filter(dsl::list_id.eq(list_id.to_string()));
    }
    if let Some(offset) = pagination.offset {
        q = q.offset(offset as i64);
    }
    if let Some(limit) = pagination.limit {
        q = q.limit(limit as i64);
    }
    let entities = q
        .order(dsl::rowid.asc())
        .load::<models::ItemEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities.into_iter().map(item_from_entity).collect())
}

fn set_item_inventory(conn: &mut SqliteConnection, id: &Id, inventory: i64) -> Result<()> {
    use schema::items::dsl;
    let updated = diesel::update(dsl::items.filter(dsl::id.eq(id.as_str())))
        .set(dsl::inventory.eq(inventory))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn item_from_entity(entity: models::ItemEntity) -> Item {
    let models::ItemEntity {
        rowid: _,
        id,
        list_id,
        name,
        category,
        retail_price_cents,
        inventory,
    } = entity;
    Item {
        id: id.into(),
        list_id: list_id.into(),
        name,
        category,
        retail_price_cents,
        inventory,
    }
}
