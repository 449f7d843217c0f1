//! lark-notify: post Drone pipeline results to a Lark bot.
//!
//! Settings come from the `PLUGIN_*` / `DRONE_*` environment. Every failure is
//! reported on stdout and the process still exits 0, so a notification
//! problem never fails the pipeline step.

use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use lark_notify_cli::{Outcome, RunOptions, WebhookClient, run};
use lark_notify_config::vars::PLUGIN_DEBUG;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "lark-notify")]
#[command(about = "Notify a Lark bot webhook about a Drone build or deploy", long_about = None)]
struct Cli {
    /// Compose and sign the card, log it, and skip the HTTP request
    #[arg(
        long,
        env = "PLUGIN_DRY_RUN",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    dry_run: bool,

    /// Log output format
    #[arg(long, env = "PLUGIN_LOG_FORMAT", value_enum, default_value = "text")]
    log_format: LogFormat,
}

/// Parse the command line and `PLUGIN_*` flag settings.
///
/// A bad value is printed and `None` returned; it must not fail the step.
fn parse_cli<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

fn init_tracing(format: LogFormat, debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let Some(cli) = parse_cli(std::env::args_os()) else {
        return Ok(());
    };

    let debug = lark_notify_config::env_lookup(PLUGIN_DEBUG).as_deref() == Some("true");
    init_tracing(cli.log_format, debug);

    let options = RunOptions {
        timestamp: chrono::Utc::now().timestamp(),
        dry_run: cli.dry_run,
    };

    let outcome = run(
        lark_notify_config::env_lookup,
        |config| WebhookClient::new(config.debug),
        options,
    )
    .await;

    match outcome {
        Ok(Outcome::Delivered(delivery)) if delivery.is_success() => {
            info!(status = delivery.status, "Notification delivered");
        }
        Ok(Outcome::Delivered(delivery)) => {
            warn!(
                status = delivery.status,
                body = %delivery.body,
                "Webhook rejected notification"
            );
        }
        Ok(Outcome::DryRun(_)) => {}
        Err(e) => {
            error!("{}", e);
        }
    }

    Ok(())
}
