use std::{fmt::Debug, path::Path, time::Duration};

use derive_more::From;
use namemc_scraping_utils::config_file::read_config;
use serde::Deserialize;
use typed_builder::TypedBuilder;
use url::Url;

pub const CREDENTIALS_PATH: &str = "ignore/namemc-credentials.toml";
pub const BASE_URL: &str = "https://namemc.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36 OPR/93.0.0.0";
pub const DEFAULT_EXTRACT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, TypedBuilder, Deserialize)]
pub struct Credentials {
    pub cookie: SessionCookie,
    #[serde(default)]
    #[builder(default)]
    pub user_agent: Option<UserAgent>,
}

/// Value of the `Cookie` header the site expects; used verbatim.
#[derive(Clone, From, Deserialize)]
pub struct SessionCookie(String);
impl Debug for SessionCookie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionCookie(<redacted>)")
    }
}
impl SessionCookie {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, From, derive_more::Display, Deserialize)]
pub struct UserAgent(String);
impl Default for UserAgent {
    fn default() -> Self {
        Self(DEFAULT_USER_AGENT.to_owned())
    }
}
impl UserAgent {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Credentials {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        read_config(path.as_ref())
    }
}

#[derive(Debug, TypedBuilder)]
pub struct Config {
    pub credentials: Credentials,
    pub base_url: Url,
    #[builder(default = DEFAULT_EXTRACT_TIMEOUT)]
    pub extract_timeout: Duration,
}
