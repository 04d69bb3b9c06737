//! Minimal stand-in for a hosting engine: builds the activity from
//! environment credentials, invokes it once with a message taken from the
//! command line, and prints the resulting status.

use anyhow::Context;
use env_logger::Env;
use log::info;
use serde_json::json;

use pushover::PushoverActivity;
use pushover::host::{RecordChannel, StaticSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app_token =
        std::env::var("PUSHOVER_APP_TOKEN").context("PUSHOVER_APP_TOKEN is not set")?;
    let group_token =
        std::env::var("PUSHOVER_GROUP_TOKEN").context("PUSHOVER_GROUP_TOKEN is not set")?;
    let message = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

    let source = StaticSettings::from_value(json!({
        "appToken": app_token,
        "groupToken": group_token,
        "active": true,
    }));
    let activity = PushoverActivity::new(&source)?;

    info!("Dispatching message ({} bytes)", message.len());

    let mut channel = RecordChannel::from_value(json!({ "message": message }));
    activity.eval(&mut channel).await?;

    match channel.output().and_then(|record| record.get("status")) {
        Some(status) => println!("Delivery status: {status}"),
        None => println!("No output produced"),
    }

    Ok(())
}
