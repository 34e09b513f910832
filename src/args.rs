use crate::config::ReportType;
use clap::{builder::PossibleValuesParser, ArgAction, Parser};
use strum::VariantNames;

#[derive(Debug, Parser)]
pub struct Args {
    /// Turn debugging information on
    #[arg(short, long, action(ArgAction::Count))]
    pub verbose: u8,
    /// Base url of the JFrog platform instance
    #[arg(short, long, env = "JFROG_URL")]
    pub url: String,
    /// Access token for the platform api
    #[arg(long, env = "JFROG_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Which report variant to request
    #[arg(
        short = 't',
        long,
        env = "WORKER_REPORT_TYPE",
        default_value = "violations",
        value_parser(PossibleValuesParser::new(ReportType::VARIANTS))
    )]
    pub report_type: String,
    /// Delete reports left behind by earlier runs instead of generating a new one
    #[arg(short, long, env = "WORKER_CLEAN_REPORTS")]
    pub clean_reports: bool,
}
