use crate::usecases::prelude::*;

#[derive(Debug, Clone)]
pub struct NewQrCode {
    pub business_id: Id,
    pub campaign_id: Option<Id>,
    pub machine_id: Option<Id>,
    pub qr_type: QrType,
}

pub fn create_qr_code<R>(repo: &R, new_qr_code: NewQrCode, now: Timestamp) -> Result<QrCode>
where
    R: QrCodeRepo + BusinessRepo + CampaignRepo + MachineRepo,
{
    let NewQrCode {
        business_id,
        campaign_id,
        machine_id,
        qr_type,
    } = new_qr_code;
    repo.get_business(&business_id)?;
    if let Some(campaign_id) = &campaign_id {
        let campaign = repo.get_campaign(campaign_id)?;
        if campaign.business_id != business_id {
            return Err(Error::Forbidden);
        }
    }
    if let Some(machine_id) = &machine_id {
        let machine = repo.get_machine(machine_id)?;
        if machine.business_id != business_id {
            return Err(Error::Forbidden);
        }
    }
    let qr_code = QrCode {
        id: Id::new(),
        code: Id::new().to_string(),
        business_id,
        campaign_id,
        machine_id,
        qr_type,
        created_at: now,
    };
    repo.create_qr_code(&qr_code)?;
    Ok(qr_code)
}
