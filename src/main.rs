use clap::Parser;
use env_logger::Env;
use xray_report_worker::args::Args;
use xray_report_worker::client::XrayClient;
use xray_report_worker::config::Config;
use xray_report_worker::errors::*;
use xray_report_worker::worker;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "info",
        _ => "debug",
    };
    env_logger::init_from_env(Env::default().default_filter_or(log_level));

    let config = Config::new(&args.report_type, args.clean_reports)?;
    let client = XrayClient::new(&args.url, args.token);

    let response = worker::run(&client, &config).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
