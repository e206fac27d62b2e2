use anyhow::Result;
use channel_info_rust::{ChannelClient, ChannelOptions, Config, RequestOptions};
use clap::{Arg, ArgAction, Command};
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before anything can log; the level from the config
    // file is applied once it is loaded, unless RUST_LOG is set.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let has_env_filter = env_filter.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = Command::new("Channel Info (Rust)")
        .version("0.1.0")
        .author("TigreRoll")
        .about("Extract channel profiles from channel pages")
        .arg(
            Arg::new("channel")
                .value_name("CHANNEL")
                .help("Channel id, @handle or channel URL")
                .required(true)
                .num_args(1..)
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to a TOML configuration file")
        )
        .arg(
            Arg::new("no-videos")
                .long("no-videos")
                .help("Skip the videos and shorts tabs")
                .action(ArgAction::SetTrue)
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Per-request timeout")
                .value_parser(clap::value_parser!(u64))
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print compact JSON")
                .action(ArgAction::SetTrue)
        )
        .get_matches();

    // Load configuration
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    if !has_env_filter {
        filter_handle.reload(EnvFilter::try_new(&config.output.log_level)?)?;
    }
    debug!("{}", config.summary());

    let mut request_options = RequestOptions::default();
    if let Some(seconds) = matches.get_one::<u64>("timeout") {
        request_options = request_options.with_timeout(Duration::from_secs(*seconds));
    }

    let options = ChannelOptions {
        include_videos: config.extraction.include_videos && !matches.get_flag("no-videos"),
        request_options,
    };
    let pretty = config.output.pretty && !matches.get_flag("compact");

    let channels: Vec<String> = matches
        .get_many::<String>("channel")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    info!("🚀 Extracting {} channel(s)", channels.len());

    let client = ChannelClient::new(&config)?;
    let results: Vec<_> = stream::iter(channels)
        .map(|channel| {
            let client = client.clone();
            let options = options.clone();
            async move {
                let result = client.channel_info(&channel, &options).await;
                (channel, result)
            }
        })
        .buffered(config.http.max_concurrent_requests)
        .collect()
        .await;

    let mut failed = 0usize;
    for (channel, result) in results {
        match result {
            Ok(record) => {
                let json = if pretty {
                    serde_json::to_string_pretty(&record)?
                } else {
                    serde_json::to_string(&record)?
                };
                println!("{}", json);
            }
            Err(e) => {
                failed += 1;
                if e.is_retryable() {
                    warn!("❌ {} ({} stage, retryable): {}", channel, e.stage(), e);
                } else {
                    error!("❌ {} ({} stage): {}", channel, e.stage(), e);
                }
            }
        }
    }

    if failed > 0 {
        return Err(anyhow::anyhow!("{} channel(s) failed", failed));
    }

    Ok(())
}
