pub mod field;
pub mod parser;

use std::time::{Duration, Instant};

use derive_more::{Deref, Display, From};
use futures::future::join_all;
use getset::{CopyGetters, Getters};
use log::{debug, warn};
use scraper::Html;
use tokio::task::yield_now;

use crate::error::ScrapeError;

use self::field::{Field, FieldValue};

#[derive(Clone, PartialEq, Eq, Debug, From, Display, Deref)]
pub struct ProfileUuid(String);

#[derive(Clone, PartialEq, Eq, Debug, From, Display, Deref)]
pub struct PastName(String);

#[derive(Clone, PartialEq, Eq, Debug, From, Display, Deref)]
pub struct ServerSlug(String);

#[derive(Clone, PartialEq, Eq, Debug, From, Display, Deref)]
pub struct CapeName(String);

/// Everything scraped from one profile page.
///
/// `None` means the field could not be found on the page, which is distinct from
/// an empty list (e.g. an account that owns no capes).
#[derive(Clone, PartialEq, Eq, Default, Debug, Getters, CopyGetters)]
pub struct ProfileRecord {
    #[getset(get = "pub")]
    uuid: Option<ProfileUuid>,
    #[getset(get_copy = "pub")]
    monthly_views: Option<u64>,
    #[getset(get_copy = "pub")]
    followers: Option<u64>,
    #[getset(get = "pub")]
    past_names: Vec<PastName>,
    #[getset(get = "pub")]
    favorite_servers: Vec<ServerSlug>,
    #[getset(get = "pub")]
    capes: Vec<CapeName>,
}

impl ProfileRecord {
    fn with(mut self, value: FieldValue) -> Self {
        match value {
            FieldValue::Uuid(x) => self.uuid = x,
            FieldValue::MonthlyViews(x) => self.monthly_views = x,
            FieldValue::Followers(x) => self.followers = x,
            FieldValue::PastNames(x) => self.past_names = x,
            FieldValue::FavoriteServers(x) => self.favorite_servers = x,
            FieldValue::Capes(x) => self.capes = x,
        }
        self
    }
}

/// Runs every field extractor against `html` concurrently and assembles the results.
///
/// `scraper::Html` cannot be shared across threads, so the extractors are
/// interleaved on the current task rather than spawned.  An extractor that has
/// not started by the time `limit` has elapsed is skipped and the whole
/// extraction fails; one that is already running is not interrupted.
pub async fn extract(html: &Html, limit: Duration) -> Result<ProfileRecord, ScrapeError> {
    let deadline = Instant::now() + limit;
    let tasks = Field::all().map(move |field| async move {
        yield_now().await;
        if Instant::now() >= deadline {
            return Err(field);
        }
        let value = field.extract(html);
        if value.is_absent() {
            debug!("{field}: not found");
        } else {
            debug!("{field}: {value:?}");
        }
        Ok(value)
    });
    let values = join_all(tasks)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|field| {
            warn!("Extraction did not finish within {limit:?} (reached {field})");
            ScrapeError::ExtractionTimedOut(limit)
        })?;
    Ok(values
        .into_iter()
        .fold(ProfileRecord::default(), ProfileRecord::with))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use itertools::Itertools;
    use scraper::Html;

    use super::extract;
    use crate::error::ScrapeError;

    const PROFILE_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head><title>Notch | Minecraft Profile</title></head>
<body>
<main class="container">
  <div class="row">
    <div class="col-md-5">
      <div class="card mb-3">
        <div class="card-body">
          <div class="row no-gutters align-items-center">
            <div class="col-auto"><strong>Views</strong></div>
            <div class="col-auto">482 / month</div>
          </div>
          <div class="row no-gutters">
            <div class="col-auto"><strong>UUID</strong></div>
            <div class="col text-right">
              <div style="font-size: 90%">069a79f4-44e9-4726-a5be-fca90e38aaf5</div>
              <div style="font-size: 90%">069a79f444e94726a5befca90e38aaf5</div>
            </div>
          </div>
        </div>
      </div>
      <div class="card mb-3">
        <div class="card-header"><strong>Capes</strong></div>
        <div class="card-body">
          <a href="/capes" title="Minecraft Capes">All capes</a>
        </div>
      </div>
      <div class="card mb-3">
        <div class="card-header"><strong>Favorite Servers</strong></div>
        <div class="card-body">
          <a translate="no" href="/server/hypixel.net">Hypixel</a>
        </div>
      </div>
    </div>
    <div class="col-md">
      <div class="card mb-3">
        <div class="card-header"><strong>Name History</strong></div>
        <table class="table">
          <tr><td><a translate="no" href="/search?q=Notch">Notch</a></td></tr>
          <tr><td><a translate="no" href="/search?q=notch_old">notch_old</a></td></tr>
        </table>
      </div>
      <ul class="nav nav-tabs">
        <li class="nav-item"><a class="nav-link" href="#followers">Followers (1,717)</a></li>
        <li class="nav-item"><a class="nav-link" href="#following">Following (0)</a></li>
      </ul>
    </div>
  </div>
</main>
</body>
</html>"##;

    #[tokio::test]
    async fn whole_profile() {
        let html = Html::parse_document(PROFILE_PAGE);
        let record = extract(&html, Duration::from_secs(5)).await.unwrap();
        assert_eq!(
            record.uuid().as_ref().map(|x| x.as_str()),
            Some("069a79f444e94726a5befca90e38aaf5")
        );
        assert_eq!(record.monthly_views(), Some(482));
        assert_eq!(record.followers(), Some(1717));
        assert_eq!(
            record.past_names().iter().map(|x| x.as_str()).collect_vec(),
            ["Notch", "notch_old"]
        );
        assert_eq!(
            record
                .favorite_servers()
                .iter()
                .map(|x| x.as_str())
                .collect_vec(),
            ["hypixel.net"]
        );
        assert!(record.capes().is_empty());
    }

    #[tokio::test]
    async fn empty_page_gives_absent_fields() {
        let html = Html::parse_document("<html><body><p>Not a profile</p></body></html>");
        let record = extract(&html, Duration::from_secs(5)).await.unwrap();
        assert_eq!(record.uuid(), &None);
        assert_eq!(record.monthly_views(), None);
        assert_eq!(record.followers(), None);
        assert!(record.past_names().is_empty());
        assert!(record.favorite_servers().is_empty());
        assert!(record.capes().is_empty());
    }

    #[tokio::test]
    async fn exhausted_limit_stops_extraction() {
        let html = Html::parse_document(PROFILE_PAGE);
        let e = extract(&html, Duration::ZERO).await.unwrap_err();
        assert!(
            matches!(e, ScrapeError::ExtractionTimedOut(limit) if limit == Duration::ZERO),
            "{e:?}"
        );
    }

    #[tokio::test]
    async fn slow_extraction_runs_out_of_time() {
        // Enough anchors that six passes over them take far longer than the limit
        let anchors = r#"<a translate="no" href="/search?q=x">x</a>"#.repeat(50_000);
        let html = Html::parse_document(&format!("<html><body>{anchors}</body></html>"));
        let e = extract(&html, Duration::from_micros(1)).await.unwrap_err();
        assert!(matches!(e, ScrapeError::ExtractionTimedOut(_)), "{e:?}");
    }
}
