//! The interactive loop: ask for a name, scrape it, show the result, repeat.

use std::time::Duration;

use log::{debug, error};
use scraper::Html;

use crate::{
    api::{fetch_profile, NameMcApi},
    error::ScrapeError,
    profile::{self, ProfileRecord},
    resolver::{resolve, Suffix},
    username::Username,
};

/// Whatever talks to the person at the terminal.
pub trait Presenter {
    /// Asks for the next username.  `None` ends the session.
    fn prompt(&mut self) -> anyhow::Result<Option<String>>;
    fn present(&mut self, username: &Username, record: &ProfileRecord);
    fn report(&mut self, error: &ScrapeError);
}

#[derive(Debug, strum::IntoStaticStr)]
enum State {
    Prompting,
    Validating(String),
    Resolving(Username),
    Fetching(Username, Suffix),
    Extracting(Username, String),
    Presenting(Username, ProfileRecord),
    Error(ScrapeError),
}

/// Runs until the presenter stops supplying names.
///
/// Returns an error only for failures that make further attempts pointless,
/// i.e. an expired session credential or a broken prompt.
pub async fn run(
    api: &impl NameMcApi,
    presenter: &mut impl Presenter,
    extract_timeout: Duration,
) -> anyhow::Result<()> {
    let mut state = State::Prompting;
    loop {
        debug!("State: {}", <&'static str>::from(&state));
        state = match state {
            State::Prompting => match presenter.prompt()? {
                Some(input) => State::Validating(input),
                None => return Ok(()),
            },
            State::Validating(input) => match Username::parse(&input) {
                Ok(username) => State::Resolving(username),
                Err(e) => State::Error(e.into()),
            },
            State::Resolving(username) => match resolve(api, &username).await {
                Ok(suffix) => State::Fetching(username, suffix),
                Err(e) => State::Error(e),
            },
            State::Fetching(username, suffix) => {
                match fetch_profile(api, &username, suffix).await {
                    Ok(body) => State::Extracting(username, body),
                    Err(e) => State::Error(e),
                }
            }
            State::Extracting(username, body) => {
                let html = Html::parse_document(&body);
                match profile::extract(&html, extract_timeout).await {
                    Ok(record) => State::Presenting(username, record),
                    Err(e) => State::Error(e),
                }
            }
            State::Presenting(username, record) => {
                presenter.present(&username, &record);
                State::Prompting
            }
            State::Error(e) => {
                presenter.report(&e);
                if e.is_fatal() {
                    error!("Giving up: {e}");
                    return Err(e.into());
                }
                State::Prompting
            }
        };
    }
}
