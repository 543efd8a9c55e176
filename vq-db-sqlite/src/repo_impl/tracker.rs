use super::*;

impl<'a> TrackerRepo for DbConnection<'a> {
    fn create_tracker(&self, tracker: &PizzaTracker) -> Result<()> {
        create_tracker(self.conn.borrow_mut().sqlite(), tracker)
    }
    fn get_tracker(&self, id: &Id) -> Result<PizzaTracker> {
        get_tracker(self.conn.borrow_mut().sqlite(), id)
    }
    fn trackers_of_business(&self, business_id: &Id) -> Result<Vec<PizzaTracker>> {
        trackers_of_business(self.conn.borrow_mut().sqlite(), business_id)
    }
    fn add_tracker_revenue(&self, id: &Id, amount_cents: i64) -> Result<()> {
        add_tracker_revenue(self.conn.borrow_mut().sqlite(), id, amount_cents)
    }
    fn complete_tracker_cycle(&self, id: &Id, completed_at: Timestamp) -> Result<()> {
        complete_tracker_cycle(self.conn.borrow_mut().sqlite(), id, completed_at)
    }
    fn append_revenue_event(&self, event: &RevenueEvent) -> Result<()> {
        append_revenue_event(self.conn.borrow_mut().sqlite(), event)
    }
    fn increment_promo_views(&self, id: &Id) -> Result<()> {
        increment_promo_views(self.conn.borrow_mut().sqlite(), id)
    }
    fn increment_promo_clicks(&self, id: &Id) -> Result<()> {
        increment_promo_clicks(self.conn.borrow_mut().sqlite(), id)
    }
}

fn create_tracker(conn: &mut SqliteConnection, t: &PizzaTracker) -> Result<()> {
    let new_tracker = models::NewTracker {
        id: t.id.as_str(),
        business_id: t.business_id.as_str(),
        name: &t.name,
        revenue_goal_cents: t.revenue_goal_cents,
        current_revenue_cents: t.current_revenue_cents,
        completion_count: t.completion_count as i32,
        last_completion_at: t.last_completion_at.map(Timestamp::as_secs),
        promo_message: t.promo_message.as_deref(),
        promo_active: t.promo_active,
        promo_views: t.promo_views as i64,
        promo_clicks: t.promo_clicks as i64,
    };
    diesel::insert_into(schema::pizza_trackers::table)
        .values(&new_tracker)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_tracker(conn: &mut SqliteConnection, id: &Id) -> Result<PizzaTracker> {
    use schema::pizza_trackers::dsl;
    let entity = dsl::pizza_trackers
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::TrackerEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(tracker_from_entity(entity))
}

fn trackers_of_business(
    conn: &mut SqliteConnection,
    business_id: &Id,
) -> Result<Vec<PizzaTracker>> {
    use schema::pizza_trackers::dsl;
    let entities = dsl::pizza_trackers
        .filter(dsl::business_id.eq(business_id.as_str()))
        .order(dsl::rowid.asc())
        .load::<models::TrackerEntity>(conn)
        .map_err(from_diesel_err)?;
    Ok(entities.into_iter().map(tracker_from_entity).collect())
}

// `revenue = revenue + amount` has to happen inside the database
// to stay correct under concurrent updates.
fn add_tracker_revenue(conn: &mut SqliteConnection, id: &Id, amount_cents: i64) -> Result<()> {
    use schema::pizza_trackers::dsl;
    let updated = diesel::update(dsl::pizza_trackers.filter(dsl::id.eq(id.as_str())))
        .set(dsl::current_revenue_cents.eq(dsl::current_revenue_cents + amount_cents))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn complete_tracker_cycle(
    conn: &mut SqliteConnection,
    id: &Id,
    completed_at: Timestamp,
) -> Result<()> {
    use schema::pizza_trackers::dsl;
    let updated = diesel::update(dsl::pizza_trackers.filter(dsl::id.eq(id.as_str())))
        .set((
            dsl::current_revenue_cents.eq(0),
            dsl::completion_count.eq(dsl::completion_count + 1),
            dsl::last_completion_at.eq(completed_at.as_secs()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn append_revenue_event(conn: &mut SqliteConnection, event: &RevenueEvent) -> Result<()> {
    let new_event = models::NewRevenueEvent {
        id: event.id.as_str(),
        tracker_id: event.tracker_id.as_str(),
        amount_cents: event.amount_cents,
        created_at: event.created_at.as_secs(),
    };
    diesel::insert_into(schema::tracker_revenue_events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn increment_promo_views(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::pizza_trackers::dsl;
    let updated = diesel::update(dsl::pizza_trackers.filter(dsl::id.eq(id.as_str())))
        .set(dsl::promo_views.eq(dsl::promo_views + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn increment_promo_clicks(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::pizza_trackers::dsl;
    let updated = diesel::update(dsl::pizza_trackers.filter(dsl::id.eq(id.as_str())))
        .set(dsl::promo_clicks.eq(dsl::promo_clicks + 1))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn tracker_from_entity(entity: models::TrackerEntity) -> PizzaTracker {
    let models::TrackerEntity {
        rowid: _,
        id,
        business_id,
        name,
        revenue_goal_cents,
        current_revenue_cents,
        completion_count,
        last_completion_at,
        promo_message,
        promo_active,
        promo_views,
        promo_clicks,
    } = entity;
    PizzaTracker {
        id: id.into(),
        business_id: business_id.into(),
        name,
        revenue_goal_cents,
        current_revenue_cents,
        completion_count: completion_count as u32,
        last_completion_at: last_completion_at.map(Timestamp::from_secs),
        promo_message,
        promo_active,
        promo_views: promo_views as u64,
        promo_clicks: promo_clicks as u64,
    }
}
