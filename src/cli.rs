// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use clap::{
    crate_description,
    crate_name,
    crate_version,
    value_parser,
    Arg,
    ArgMatches,
    Command,
};
use tracing::debug;

// Create clap command
pub(crate) fn create_command() -> Command {
    debug!("Creating CLI command");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("CONFIG_BUCKET")
                .env("CONFIG_S3_BUCKET")
                .hide_env_values(true)
                .long("config-bucket")
                .short('c')
                .value_name("BUCKET")
                .help("S3 bucket holding an optional config.json with overrides")
        )
        .arg(
            Arg::new("MAX_CONCURRENCY")
                .long("max-concurrency")
                .short('j')
                .value_name("N")
                .value_parser(value_parser!(u64).range(1..))
                .help("Maximum number of buckets scanned concurrently")
        )
        .arg(
            Arg::new("PREFIX")
                .long("prefix")
                .short('p')
                .value_name("PREFIX")
                .help("Only scan buckets whose name starts with this prefix")
        )
        .arg(
            Arg::new("REPORT_BUCKET")
                .long("report-bucket")
                .value_name("BUCKET")
                .help("Write a CSV report of the scan to this bucket")
        )
        .arg(
            Arg::new("REGION")
                .env("AWS_REGION")
                .hide_env_values(true)
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("Set the AWS region to create the client in")
        )
}

/// Parse the command line arguments.
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_command().get_matches()
}
