use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use log::info;
use namemc_scraping::{
    api::NameMcClient,
    config::{self, Config, Credentials},
    presenter::TerminalPresenter,
    session,
};
use url::Url;

#[derive(Parser)]
struct Opts {
    /// TOML (or JSON) file holding the session `cookie` and an optional `user_agent`.
    #[arg(default_value = config::CREDENTIALS_PATH)]
    credentials_path: PathBuf,
    #[arg(long, default_value = config::BASE_URL)]
    base_url: Url,
    #[arg(long, default_value_t = config::DEFAULT_EXTRACT_TIMEOUT.as_secs())]
    extract_timeout_secs: u64,
    /// Scrape this name once and exit instead of prompting.
    #[arg(long)]
    name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let credentials = Credentials::load(&opts.credentials_path)
        .with_context(|| format!("Failed to load credentials from {:?}", opts.credentials_path))?;
    let config = Config::builder()
        .credentials(credentials)
        .base_url(opts.base_url)
        .extract_timeout(Duration::from_secs(opts.extract_timeout_secs))
        .build();
    info!("Using {}", config.base_url);
    let client = NameMcClient::new(&config)?;

    let mut presenter = match opts.name {
        Some(name) => TerminalPresenter::once(name),
        None => TerminalPresenter::interactive(),
    };
    session::run(&client, &mut presenter, config.extract_timeout).await
}
