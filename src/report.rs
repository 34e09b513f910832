use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Reports carrying this prefix were created by this worker
pub const REPORT_NAME_PREFIX: &str = "worker_xray_report_";

pub fn report_name() -> String {
    report_name_for(Utc::now().date_naive())
}

pub fn report_name_for(date: NaiveDate) -> String {
    format!("{}{}", REPORT_NAME_PREFIX, date.format("%Y-%m-%d"))
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ReportPayload {
    pub name: String,
    pub resources: Resources,
    pub filters: Filters,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Resources {
    pub projects: Projects,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Projects {
    pub names: Vec<String>,
    pub include_key_patterns: Vec<String>,
    pub number_of_latest_versions: u32,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Filters {
    pub vulnerable_component: String,
    pub impacted_artifact: String,
    pub cve: String,
    pub issue_id: String,
    pub severities: Vec<String>,
}

impl ReportPayload {
    /// Scope covering every project at its 5 latest versions, no filters
    pub fn unfiltered(name: &str) -> ReportPayload {
        ReportPayload {
            name: name.to_string(),
            resources: Resources {
                projects: Projects {
                    names: Vec::new(),
                    include_key_patterns: vec!["**".to_string()],
                    number_of_latest_versions: 5,
                },
            },
            filters: Filters {
                vulnerable_component: String::new(),
                impacted_artifact: String::new(),
                cve: String::new(),
                issue_id: String::new(),
                severities: Vec::new(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedReport {
    pub report_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReportList {
    pub reports: Vec<ReportSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSummary {
    pub id: String,
    pub status: String,
    pub name: String,
    pub progress: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::*;

    #[test]
    fn test_report_name_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(report_name_for(date), "worker_xray_report_2025-01-01");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(report_name_for(date), "worker_xray_report_2024-12-31");
    }

    #[test]
    fn test_report_name_uses_prefix() {
        assert!(report_name().starts_with(REPORT_NAME_PREFIX));
    }

    #[test]
    fn test_unfiltered_payload_shape() -> Result<()> {
        let payload = serde_json::to_value(ReportPayload::unfiltered("worker_xray_report_2025-01-01"))?;
        assert_eq!(
            payload,
            serde_json::json!({
                "name": "worker_xray_report_2025-01-01",
                "resources": {
                    "projects": {
                        "names": [],
                        "include_key_patterns": ["**"],
                        "number_of_latest_versions": 5,
                    },
                },
                "filters": {
                    "vulnerable_component": "",
                    "impacted_artifact": "",
                    "cve": "",
                    "issue_id": "",
                    "severities": [],
                },
            })
        );
        Ok(())
    }

    #[test]
    fn test_payload_builder_is_pure() {
        let a = ReportPayload::unfiltered("x");
        let b = ReportPayload::unfiltered("x");
        assert_eq!(a, b);
    }
}
