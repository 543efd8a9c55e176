use super::*;

#[get("/businesses/<id>/notifications")]
pub fn get_notification_preferences(
    db: sqlite::Connections,
    account: Account,
    id: String,
) -> Result<json::NotificationPreferences> {
    let id = Id::from(id);
    let connection = db.shared()?;
    usecases::authorize_business_owner(&connection.inner(), account.email(), &id)?;
    let prefs = usecases::notification_preferences_of_business(&connection.inner(), &id)?;
    Ok(Json(prefs.into()))
}

#[put(
    "/businesses/<id>/notifications",
    format = "application/json",
    data = "<prefs>"
)]
pub fn put_notification_preferences(
    db: sqlite::Connections,
    account: Account,
    id: String,
    prefs: JsonResult<json::NotificationPreferences>,
) -> Result<json::NotificationPreferences> {
    let prefs = prefs?.into_inner();
    let id = Id::from(id);
    let connection = db.exclusive()?;
    usecases::authorize_business_owner(&connection.inner(), account.email(), &id)?;
    let saved = usecases::update_notification_preferences(
        &connection.inner(),
        &id,
        usecases::NotificationSettings {
            email_enabled: prefs.email_enabled,
            sms_enabled: prefs.sms_enabled,
            push_enabled: prefs.push_enabled,
            milestones: prefs.milestones,
        },
    )?;
    Ok(Json(saved.into()))
}
