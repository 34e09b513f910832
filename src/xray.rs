use crate::client::PlatformClient;
use crate::config::ReportType;
use crate::errors::*;
use crate::report::{CreatedReport, ReportList, ReportPayload, REPORT_NAME_PREFIX};

pub const LIST_PATH: &str = "reports?direction=desc&page_num=1&num_of_rows=10&order_by=start_time";

pub async fn request_report(
    client: &dyn PlatformClient,
    payload: &ReportPayload,
    report_type: ReportType,
) -> Result<String, ApiError> {
    let path = format!("reports/{}", report_type);
    let body = serde_json::to_value(payload).map_err(|err| ApiError::Transport(err.to_string()))?;

    let resp = client.post(&path, Some(&body)).await?;
    if !resp.is_success() {
        return Err(ApiError::upstream(resp.status, resp.body));
    }

    let created: CreatedReport = serde_json::from_str(&resp.body)
        .map_err(|_| ApiError::upstream(resp.status, "Response body has no report_id"))?;
    debug!("Platform assigned report_id={:?}", created.report_id);
    Ok(created.report_id)
}

/// Fetch the 10 most recent reports and keep the ones this worker created,
/// as index-aligned (ids, names) in descending start_time order
pub async fn list_reports(
    client: &dyn PlatformClient,
) -> Result<(Vec<String>, Vec<String>), ApiError> {
    let resp = client.post(LIST_PATH, None).await?;
    if !resp.is_success() {
        return Err(ApiError::upstream(resp.status, resp.body));
    }

    let list: ReportList = serde_json::from_str(&resp.body)
        .map_err(|err| ApiError::upstream(resp.status, err.to_string()))?;

    let (ids, names) = list
        .reports
        .into_iter()
        .filter(|report| report.name.starts_with(REPORT_NAME_PREFIX))
        .map(|report| (report.id, report.name))
        .unzip();
    Ok((ids, names))
}

/// Delete reports one at a time. A non-success status for one report is
/// logged and the remaining reports are still attempted.
pub async fn delete_reports(client: &dyn PlatformClient, ids: &[String]) -> Result<(), ApiError> {
    for id in ids {
        let resp = client.delete(&format!("reports/{}", id)).await?;
        if resp.is_success() {
            debug!("Deleted report {:?}", id);
        } else {
            warn!(
                "Failed to delete report {:?}: {}: {}",
                id, resp.status, resp.body
            );
        }
    }
    Ok(())
}
