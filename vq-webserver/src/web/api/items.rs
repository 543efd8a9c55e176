use super::*;

#[get("/items/search?<text>&<category>&<list>&<offset>&<limit>")]
pub fn get_items(
    db: sqlite::Connections,
    text: Option<String>,
    category: Option<String>,
    list: Option<String>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Result<Vec<json::Item>> {
    let query = ItemQuery {
        text,
        category,
        list_id: list.map(Into::into),
    };
    let pagination = Pagination { offset, limit };
    let connection = db.shared()?;
    let items = usecases::search_items(&connection.inner(), &query, &pagination)?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[post("/items/<id>/inventory", format = "application/json", data = "<update>")]
pub fn post_item_inventory(
    db: sqlite::Connections,
    account: Account,
    id: String,
    update: JsonResult<json::InventoryUpdate>,
) -> Result<json::Item> {
    let update = update?.into_inner();
    let id = Id::from(id);
    let connection = db.exclusive()?;
    let list_id = connection.inner().get_item(&id)?.list_id;
    let business_id = connection.inner().get_voting_list(&list_id)?.business_id;
    usecases::authorize_business_owner(&connection.inner(), account.email(), &business_id)?;
    let item = usecases::update_item_inventory(&connection.inner(), &id, update.inventory)?;
    Ok(Json(item.into()))
}
