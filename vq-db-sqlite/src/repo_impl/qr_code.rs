use super::*;

impl<'a> QrCodeRepo for DbConnection<'a> {
    fn create_qr_code(&self, qr_code: &QrCode) -> Result<()> {
        create_qr_code(self.conn.borrow_mut().sqlite(), qr_code)
    }
    fn try_get_qr_code_by_code(&self, code: &str) -> Result<Option<QrCode>> {
        try_get_qr_code_by_code(self.conn.borrow_mut().sqlite(), code)
    }
}

fn create_qr_code(conn: &mut SqliteConnection, q: &QrCode) -> Result<()> {
    let new_qr_code = models::NewQrCode {
        id: q.id.as_str(),
        code: &q.code,
        business_id: q.business_id.as_str(),
        campaign_id: q.campaign_id.as_ref().map(Id::as_str),
        machine_id: q.machine_id.as_ref().map(Id::as_str),
        qr_type: q.qr_type.as_ref(),
        created_at: q.created_at.as_secs(),
    };
    diesel::insert_into(schema::qr_codes::table)
        .values(&new_qr_code)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn try_get_qr_code_by_code(conn: &mut SqliteConnection, code: &str) -> Result<Option<QrCode>> {
    use schema::qr_codes::dsl;
    dsl::qr_codes
        .filter(dsl::code.eq(code))
        .first::<models::QrCodeEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(qr_code_from_entity)
        .transpose()
}

fn qr_code_from_entity(entity: models::QrCodeEntity) -> Result<QrCode> {
    let models::QrCodeEntity {
        rowid: _,
        id,
        code,
        business_id,
        campaign_id,
        machine_id,
        qr_type,
        created_at,
    } = entity;
    let qr_type = QrType::parse(&qr_type)
        .map_err(|_| repo::Error::Other(anyhow!("Unexpected QR type in database: {qr_type}")))?;
    Ok(QrCode {
        id: id.into(),
        code,
        business_id: business_id.into(),
        campaign_id: campaign_id.map(Into::into),
        machine_id: machine_id.map(Into::into),
        qr_type,
        created_at: Timestamp::from_secs(created_at),
    })
}
