//! Working out which historical profile a username refers to.
//!
//! The search page lists every account that has held a name under a heading like
//! `Profiles: 3 results`.  The profile URL then needs a `.N` suffix to pick one;
//! `.1` is used when the name has only ever had a single holder.

use std::{fmt::Display, num::NonZeroU32};

use log::{debug, info};
use namemc_scraping_utils::selector;
use reqwest::StatusCode;
use scraper::Html;

use crate::{api::NameMcApi, error::ScrapeError, username::Username};

/// The `.N` segment appended to a profile path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Suffix(NonZeroU32);

impl Suffix {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    pub fn get(self) -> NonZeroU32 {
        self.0
    }
}

impl Display for Suffix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("No profile heading was found on the search page")]
    NotFound,
    #[error("Unexpected profile count in heading: {0:?}")]
    MalformedCount(String),
}

pub async fn resolve(api: &impl NameMcApi, username: &Username) -> Result<Suffix, ScrapeError> {
    info!("Searching for {username}.");
    let page = api.search(username).await?;
    debug!("Search returned {}", page.status);
    match page.status {
        StatusCode::FORBIDDEN => return Err(ScrapeError::CredentialExpired(page.status)),
        status if !status.is_success() => return Err(ScrapeError::SearchFailed(status)),
        _ => {}
    }
    let suffix = parse_search_page(&Html::parse_document(&page.body))
        .map_err(|e| ScrapeError::from_resolve(username, e))?;
    info!("Resolved {username} to suffix {suffix}");
    Ok(suffix)
}

pub fn parse_search_page(html: &Html) -> Result<Suffix, ResolveError> {
    let heading = html
        .select(selector!("h5"))
        .map(|h5| h5.text().collect::<String>())
        .find(|text| text.contains("Profiles"))
        .ok_or(ResolveError::NotFound)?;
    parse_profiles_heading(&heading)
}

/// Parses the text of the `Profiles` heading, e.g. `Profiles: 3 results`.
pub fn parse_profiles_heading(text: &str) -> Result<Suffix, ResolveError> {
    if !text.contains("results") {
        return Ok(Suffix::FIRST);
    }
    let malformed = || ResolveError::MalformedCount(text.to_owned());
    let count = text
        .split(':')
        .nth(1)
        .ok_or_else(malformed)?
        .split("result")
        .next()
        .unwrap_or_default()
        // Digits may be grouped with thin spaces or commas
        .chars()
        .filter(|&c| !(c.is_whitespace() || c == ','))
        .collect::<String>();
    count.parse().map(Suffix).map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{parse_profiles_heading, parse_search_page, ResolveError, Suffix};

    fn search_page(heading: &str) -> Html {
        Html::parse_document(&format!(
            r#"<html><body>
            <div class="card"><h5 class="card-header">Servers</h5></div>
            <div class="card"><h5 class="card-header">{heading}</h5></div>
            </body></html>"#
        ))
    }

    #[test]
    fn several_profiles() {
        let suffix = parse_search_page(&search_page("Profiles: 3 results")).unwrap();
        assert_eq!(suffix.to_string(), ".3");
    }

    #[test]
    fn single_profile() {
        assert_eq!(parse_search_page(&search_page("Profiles")), Ok(Suffix::FIRST));
        assert_eq!(Suffix::FIRST.to_string(), ".1");
        // Singular "result" has no "results" in it
        assert_eq!(parse_profiles_heading("Profiles: 1 result"), Ok(Suffix::FIRST));
    }

    #[test]
    fn no_profiles_heading() {
        let html = Html::parse_document("<h5>Servers</h5><h4>Profiles: 2 results</h4>");
        assert_eq!(parse_search_page(&html), Err(ResolveError::NotFound));
    }

    #[test]
    fn en_spaces_are_stripped() {
        let suffix = parse_profiles_heading("Profiles:\u{2002}12\u{2002}results").unwrap();
        assert_eq!(suffix.to_string(), ".12");
        let suffix = parse_profiles_heading("Profiles: 1,204 results ").unwrap();
        assert_eq!(suffix.get().get(), 1204);
    }

    #[test]
    fn malformed_count_is_rejected() {
        for heading in [
            "Profiles: 0 results",
            "Profiles: many results",
            "Profiles results",
            "Profiles: results",
        ] {
            assert!(
                matches!(
                    parse_profiles_heading(heading),
                    Err(ResolveError::MalformedCount(_))
                ),
                "{heading:?}"
            );
        }
    }
}
