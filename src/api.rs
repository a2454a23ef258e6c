use log::debug;
use reqwest::{header, StatusCode};
use url::Url;

use crate::{
    config::{Config, Credentials, SessionCookie},
    error::ScrapeError,
    resolver::Suffix,
    username::Username,
};

/// Status code and body of one response; nothing else is looked at.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

/// The two requests the scraper needs from the site.
#[allow(async_fn_in_trait)]
pub trait NameMcApi {
    async fn search(&self, username: &Username) -> reqwest::Result<Page>;
    async fn profile(&self, username: &Username, suffix: Suffix) -> reqwest::Result<Page>;
}

pub struct NameMcClient {
    reqwest: reqwest::Client,
    base_url: Url,
    cookie: SessionCookie,
}

impl NameMcClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let Credentials { cookie, user_agent } = &config.credentials;
        let reqwest = reqwest::Client::builder()
            .user_agent(user_agent.clone().unwrap_or_default().as_str())
            .connection_verbose(true)
            .build()?;
        Ok(Self {
            reqwest,
            base_url: config.base_url.clone(),
            cookie: cookie.clone(),
        })
    }

    pub fn search_url(&self, username: &Username) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("/search");
        url.query_pairs_mut().append_pair("q", username.as_str());
        url
    }

    pub fn profile_url(&self, username: &Username, suffix: Suffix) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("/profile/{username}{suffix}"));
        url
    }

    async fn get(&self, url: Url) -> reqwest::Result<Page> {
        debug!("GET {url}");
        let response = self
            .reqwest
            .get(url)
            .header(header::COOKIE, self.cookie.as_str())
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(Page { status, body })
    }
}

impl NameMcApi for NameMcClient {
    async fn search(&self, username: &Username) -> reqwest::Result<Page> {
        self.get(self.search_url(username)).await
    }

    async fn profile(&self, username: &Username, suffix: Suffix) -> reqwest::Result<Page> {
        self.get(self.profile_url(username, suffix)).await
    }
}

/// Downloads the profile page, returning its HTML.
pub async fn fetch_profile(
    api: &impl NameMcApi,
    username: &Username,
    suffix: Suffix,
) -> Result<String, ScrapeError> {
    let page = api.profile(username, suffix).await?;
    debug!("Profile returned {}", page.status);
    if !page.status.is_success() {
        return Err(ScrapeError::ProfileFetchFailed(page.status));
    }
    Ok(page.body)
}
