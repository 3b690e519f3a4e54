// s3census: inventories S3 buckets and reports the space used in each.
#![forbid(unsafe_code)]
use clap::ArgMatches;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{
    Instant,
    SystemTime,
    UNIX_EPOCH,
};
use tracing::{
    info,
    warn,
};
use tracing_subscriber::EnvFilter;

mod cli;
mod common;
mod s3;
mod scan;

use common::{
    Config,
    Region,
    Response,
    CONFIG_KEY,
};
use s3::Client;

/// Resolve the effective `Config` for this invocation.
///
/// Precedence is defaults, then the optional config.json overrides, then
/// explicit command line flags. Any failure fetching or parsing the
/// overrides falls back to the defaults, config resolution never fails
/// the run.
async fn effective_config(client: &Client, matches: &ArgMatches) -> Config {
    let defaults = Config::default();

    let mut config = match matches.get_one::<String>("CONFIG_BUCKET") {
        Some(bucket) => match client.fetch_config(bucket).await {
            Ok(overrides) => {
                info!("Loaded config from {}/{}", bucket, CONFIG_KEY);

                defaults.merge_json(&overrides)
            },
            Err(e) => {
                warn!(
                    "Error reading {}/{}: {:#}, using built-in defaults",
                    bucket,
                    CONFIG_KEY,
                    e,
                );

                defaults
            },
        },
        None => {
            info!("No config bucket set, using built-in defaults");

            defaults
        },
    };

    if let Some(threads) = matches.get_one::<u64>("MAX_CONCURRENCY") {
        config.max_concurrency = *threads as usize;
    }

    if let Some(prefix) = matches.get_one::<String>("PREFIX") {
        config.filter_prefix = prefix.to_owned();
    }

    if let Some(bucket) = matches.get_one::<String>("REPORT_BUCKET") {
        config.report_bucket = Some(bucket.to_owned());
    }

    config
}

/// Run the whole scan: enumerate buckets, fan out the per-bucket sizing,
/// aggregate, and optionally upload the CSV report.
///
/// Enumeration failure is the only fatal path. Per-bucket failures are
/// folded into zero-size records, and a failed report upload is logged
/// and ignored.
async fn run(client: Arc<Client>, config: &Config) -> Response {
    let started_at = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let start = Instant::now();

    let names = match client.list_buckets(&config.filter_prefix).await {
        Ok(names) => names,
        Err(e)    => {
            return Response::fatal(format!("Failed to list buckets: {e:#}"));
        },
    };

    let scans = scan::scan_buckets(
        Arc::clone(&client),
        names,
        config.max_concurrency,
    ).await;

    let result = scan::aggregate(scans, start.elapsed().as_secs_f64());

    if let Some(report_bucket) = config.report_bucket.as_deref() {
        match client.put_report(report_bucket, started_at, &result).await {
            Ok(key) => {
                info!("Report written to s3://{}/{}", report_bucket, key);
            },
            Err(e) => {
                warn!(
                    "Failed to write report to {}: {:#}",
                    report_bucket,
                    e,
                );
            },
        }
    }

    Response::ok(result.summary())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = cli::parse_args();

    let mut region = Region::new();

    if let Some(name) = matches.get_one::<String>("REGION") {
        region = region.set_region(name);
    }

    let client = Arc::new(Client::new(region).await);
    let config = effective_config(&client, &matches).await;

    let response = run(client, &config).await;

    println!("{}", response.body);

    match response.status_code {
        200 => ExitCode::SUCCESS,
        _   => ExitCode::FAILURE,
    }
}
