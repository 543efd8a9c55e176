use super::*;

impl<'a> NotificationPrefsRepo for DbConnection<'a> {
    fn upsert_notification_preferences(&self, prefs: &NotificationPreferences) -> Result<()> {
        upsert_notification_preferences(self.conn.borrow_mut().sqlite(), prefs)
    }
    fn try_get_notification_preferences(
        &self,
        business_id: &Id,
    ) -> Result<Option<NotificationPreferences>> {
        try_get_notification_preferences(self.conn.borrow_mut().sqlite(), business_id)
    }
}

fn upsert_notification_preferences(
    conn: &mut SqliteConnection,
    prefs: &NotificationPreferences,
) -> Result<()> {
    use schema::notification_preferences::dsl;
    let new_prefs = models::NewNotificationPrefs {
        business_id: prefs.business_id.as_str(),
        email_enabled: prefs.email_enabled,
        sms_enabled: prefs.sms_enabled,
        push_enabled: prefs.push_enabled,
        milestones: encode_milestones(&prefs.milestones),
    };
    diesel::insert_into(schema::notification_preferences::table)
        .values(&new_prefs)
        .on_conflict(dsl::business_id)
        .do_update()
        .set(&new_prefs)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_notification_preferences(
    conn: &mut SqliteConnection,
    business_id: &Id,
) -> Result<Option<NotificationPreferences>> {
    use schema::notification_preferences::dsl;
    dsl::notification_preferences
        .filter(dsl::business_id.eq(business_id.as_str()))
        .first::<models::NotificationPrefsEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(prefs_from_entity)
        .transpose()
}

fn prefs_from_entity(entity: models::NotificationPrefsEntity) -> Result<NotificationPreferences> {
    let models::NotificationPrefsEntity {
        rowid: _,
        business_id,
        email_enabled,
        sms_enabled,
        push_enabled,
        milestones,
    } = entity;
    let milestones = decode_milestones(&milestones)?;
    Ok(NotificationPreferences {
        business_id: business_id.into(),
        email_enabled,
        sms_enabled,
        push_enabled,
        milestones,
    })
}

fn encode_milestones(milestones: &[u8]) -> String {
    milestones
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn decode_milestones(encoded: &str) -> Result<Vec<u8>> {
    encoded
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u8>().map_err(|_| {
                repo::Error::Other(anyhow!("Unexpected milestone in database: {s}"))
            })
        })
        .collect()
}
