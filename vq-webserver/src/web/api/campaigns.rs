use super::*;

#[get("/campaigns/<id>/results")]
pub fn get_campaign_results(db: sqlite::Connections, id: String) -> Result<Vec<json::ItemTally>> {
    let connection = db.shared()?;
    let tallies = usecases::campaign_results(&connection.inner(), &id.into())?;
    Ok(Json(
        tallies
            .into_iter()
            .map(|tally| json::ItemTally {
                item: tally.item.into(),
                votes_in: tally.votes_in,
                votes_out: tally.votes_out,
            })
            .collect(),
    ))
}
