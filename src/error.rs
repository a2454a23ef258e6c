use std::time::Duration;

use reqwest::StatusCode;

use crate::{resolver::ResolveError, username::Username, username::ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Cookie expired: search returned [{0}]")]
    CredentialExpired(StatusCode),
    #[error("Search request failed with status code [{0}]")]
    SearchFailed(StatusCode),
    #[error("{0} does not exist.")]
    NotFound(Username),
    #[error("Could not determine the profile to open: {0}")]
    Resolution(String),
    #[error("Profile request failed with status code [{0}]. Perhaps the capitalization differs?")]
    ProfileFetchFailed(StatusCode),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Extracting the profile did not finish within {0:?}")]
    ExtractionTimedOut(Duration),
}

impl ScrapeError {
    /// Only an expired credential ends the whole run; everything else is scoped to one username.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CredentialExpired(_))
    }

    pub(crate) fn from_resolve(username: &Username, e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound => Self::NotFound(username.clone()),
            e @ ResolveError::MalformedCount(_) => Self::Resolution(e.to_string()),
        }
    }
}
