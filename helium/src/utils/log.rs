use std::env;
use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

/// Variables read for the log filter, in order of preference.
const LOG_ENV_VARS: [&str; 2] = ["HELIUM_LOG", "RUST_LOG"];

pub fn setup_logging() {
    let level = LOG_ENV_VARS
        .iter()
        .find_map(|var| env::var(var).ok())
        .unwrap_or_else(|| LevelFilter::INFO.to_string());
    let (subscriber, parse_err) = parse_log_level(&level);
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log filter `{}`, logging at info: {}", level, err);
    }
}

/// Builds a subscriber from a filter such as `info` or `helium_core=debug`. An invalid filter
/// logs at info and is returned alongside.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::default().add_directive(LevelFilter::INFO.into())
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}
