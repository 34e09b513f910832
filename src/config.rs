use crate::errors::*;
use std::str::FromStr;
use strum::{Display, EnumString, EnumVariantNames};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumString, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum ReportType {
    Violations,
    Vulnerabilities,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Config {
    pub report_type: ReportType,
    pub clean_reports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            report_type: ReportType::Violations,
            clean_reports: false,
        }
    }
}

impl Config {
    pub fn new(report_type: &str, clean_reports: bool) -> Result<Config, ApiError> {
        let report_type = ReportType::from_str(report_type)
            .map_err(|_| ApiError::Config(report_type.to_string()))?;
        Ok(Config {
            report_type,
            clean_reports,
        })
    }
}
