use crate::client::PlatformClient;
use crate::config::{Config, ReportType};
use crate::errors::*;
use crate::report::{self, ReportPayload};
use crate::xray;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ScheduledEventResponse {
    pub message: String,
}

/// Entry point for one scheduled invocation. Failures never escape, they
/// fold into the returned message.
pub async fn run(client: &dyn PlatformClient, config: &Config) -> ScheduledEventResponse {
    let message = if config.clean_reports {
        clean_reports(client).await
    } else {
        generate_report(client, config.report_type).await
    };
    ScheduledEventResponse { message }
}

async fn clean_reports(client: &dyn PlatformClient) -> String {
    let (ids, names) = match xray::list_reports(client).await {
        Ok(reports) => reports,
        Err(err) => return format!("Failed to list reports: {}", err),
    };

    if ids.is_empty() {
        info!("No reports found to delete");
        return "No reports found to delete.".to_string();
    }

    info!("Deleting reports: {:?}", names);
    match xray::delete_reports(client, &ids).await {
        Ok(()) => format!("Successfully deleted {} reports.", ids.len()),
        Err(err) => format!("Failed to delete reports: {}", err),
    }
}

async fn generate_report(client: &dyn PlatformClient, report_type: ReportType) -> String {
    let name = report::report_name();
    let payload = ReportPayload::unfiltered(&name);

    let report_id = match xray::request_report(client, &payload, report_type).await {
        Ok(report_id) => report_id,
        Err(err) => return format!("Failed to generate the {} report: {}", report_type, err),
    };
    info!("Requested {} report {:?}, report_id={:?}", report_type, name, report_id);

    // Listing only feeds the log line, the report already exists
    match xray::list_reports(client).await {
        Ok((ids, names)) => {
            if let Some(idx) = ids.iter().position(|id| *id == report_id) {
                info!("Report {:?} is listed with id={:?}", names[idx], ids[idx]);
            }
        }
        Err(err) => warn!("Failed to list reports after generation: {}", err),
    }

    format!("Vulnerabilities report {} was successfully generated.", name)
}
