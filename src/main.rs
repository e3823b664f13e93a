use anyhow::Result;
use clap::Parser;
use mackerel_plugin_hitachi_drive::config::{ArrayConfig, Config};
use mackerel_plugin_hitachi_drive::plugin;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ConfigurationManager API host (host or host:port)
    #[arg(long, env = "HITACHI_HOST")]
    host: String,

    /// User ID for basic authentication
    #[arg(long, env = "HITACHI_USERID")]
    userid: String,

    /// Password for basic authentication
    #[arg(long, env = "HITACHI_PASSWORD", hide_env_values = true)]
    password: String,

    /// State file path passed by mackerel-agent (unused: all metrics are gauges)
    #[arg(long)]
    tempfile: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Credentials may come from a .env file during development
    dotenvy::dotenv().ok();

    // Logging goes to stderr; stdout belongs to the plugin wire format
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = Config {
        array: ArrayConfig {
            host: args.host,
            user_id: args.userid,
            password: secrecy::SecretString::new(args.password.into()),
        },
        tempfile: args.tempfile,
    };

    if let Err(e) = plugin::run(config).await {
        error!("plugin run failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
