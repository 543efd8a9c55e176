use super::*;

#[post("/scan", format = "application/json", data = "<scan>")]
pub fn post_scan(
    db: sqlite::Connections,
    account: Account,
    scan: JsonResult<json::ScanRequest>,
) -> Result<json::ScanResponse> {
    let scan = scan?.into_inner();
    let admin = {
        let connection = db.shared()?;
        let admin =
            usecases::authorize_user_by_email(&connection.inner(), account.email(), Role::Admin)?;
        admin
    };
    let outcome = flows::simulate_scan(&db, &admin.id, &scan.input)?;
    let response = match outcome {
        flows::ScanOutcome::Matched(resolution) => json::ScanResponse {
            success: true,
            qr_type: Some(resolution.qr_code.qr_type.as_ref().to_owned()),
            action: Some(json::SimulatedAction {
                kind: resolution.action.kind.to_owned(),
                message: resolution.action.message,
                reference: resolution.action.reference,
            }),
            hints: None,
        },
        flows::ScanOutcome::NotFound { hints } => json::ScanResponse {
            success: false,
            qr_type: None,
            action: None,
            hints: Some(hints.iter().map(|&hint| hint.to_owned()).collect()),
        },
    };
    Ok(Json(response))
}
