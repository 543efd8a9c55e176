use super::*;

/// Fetching the status doubles as a banner impression, so the promo
/// view counter advances on every snapshot.
#[get("/trackers/<id>")]
pub fn get_tracker(db: sqlite::Connections, id: String) -> Result<json::TrackerStatus> {
    let tracker = flows::view_tracker(&db, &id.into())?;
    Ok(Json(tracker_status(tracker)))
}

#[post("/trackers/<id>/revenue", format = "application/json", data = "<revenue>")]
pub fn post_revenue(
    db: sqlite::Connections,
    notify: &State<Notify>,
    account: Account,
    id: String,
    revenue: JsonResult<json::RevenueRequest>,
) -> Result<json::RevenueReport> {
    let revenue = revenue?.into_inner();
    let id = Id::from(id);
    {
        let connection = db.shared()?;
        let tracker = connection.inner().get_tracker(&id)?;
        usecases::authorize_business_owner(&connection.inner(), account.email(), &tracker.business_id)?;
    }
    let report = flows::record_revenue(&db, &***notify, &id, revenue.amount_cents)?;
    let flows::RevenueReport { tracker, update } = report;
    Ok(Json(json::RevenueReport {
        previous_percent: update.previous_percent,
        percent: update.percent,
        is_complete: update.is_complete,
        milestones_crossed: update.milestones_crossed,
        tracker: tracker_status(tracker),
    }))
}

#[post("/trackers/<id>/promo-click")]
pub fn post_promo_click(db: sqlite::Connections, id: String) -> Result<json::TrackerStatus> {
    let tracker = flows::click_promo(&db, &id.into())?;
    Ok(Json(tracker_status(tracker)))
}
