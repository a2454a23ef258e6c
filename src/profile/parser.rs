//! Extractors for the individual fields of a profile page.
//!
//! Each one looks at the whole document on its own and reports `None` (or an
//! empty list) when the page does not have what it is looking for.

use namemc_scraping_utils::selector;
use scraper::Html;

use super::{CapeName, PastName, ProfileUuid, ServerSlug};

pub const OPTIFINE_HOME: &str = "https://optifine.net/home";
pub const OPTIFINE_LABEL: &str = "OptiFine";
/// Title of the `/capes` link shown when an account has no cape at all.
pub const NO_CAPE_PLACEHOLDER: &str = "Minecraft Capes";
pub const UUID_LEN: usize = 32;

pub fn monthly_views(html: &Html) -> Option<u64> {
    let text = html
        .select(selector!("div.col-auto"))
        .map(|div| div.text().collect::<String>())
        .find(|text| text.contains("/ month"))?;
    parse_count(text.split_whitespace().next()?)
}

pub fn followers(html: &Html) -> Option<u64> {
    let text = html
        .select(selector!(r##"a[href="#followers"]"##))
        .next()?
        .text()
        .collect::<String>();
    if !text.contains("Followers (") {
        return None;
    }
    parse_count(&text.split_whitespace().nth(1)?.replace(['(', ')'], ""))
}

/// Names the account went by before, in the order the page lists them.
pub fn past_names(html: &Html) -> Vec<PastName> {
    html.select(selector!(r#"a[translate="no"]"#))
        .filter_map(|a| a.attr("href"))
        .filter(|href| href.contains("/search?q="))
        .filter_map(|href| href.split('=').nth(1))
        .map(|name| name.to_owned().into())
        .collect()
}

pub fn favorite_servers(html: &Html) -> Vec<ServerSlug> {
    html.select(selector!(r#"a[translate="no"]"#))
        .filter_map(|a| a.attr("href"))
        .filter(|href| href.contains("/server"))
        .filter_map(|href| href.split('/').nth(2))
        .map(|slug| slug.to_owned().into())
        .collect()
}

pub fn uuid(html: &Html) -> Option<ProfileUuid> {
    html.select(selector!(r#"div[style="font-size: 90%"]"#))
        .map(|div| div.text().collect::<String>())
        .find(|text| text.chars().count() == UUID_LEN)
        .map(Into::into)
}

/// The OptiFine cape (if any) comes first, followed by the capes linked from the profile.
pub fn capes(html: &Html) -> Vec<CapeName> {
    let optifine = html
        .select(selector!(r#"a[href="https://optifine.net/home"]"#))
        .next()
        .map(|a| a.text().collect::<String>())
        .filter(|text| text == OPTIFINE_LABEL)
        .map(|text| title_case(&text));
    let linked = html
        .select(selector!(r#"a[href*="/cape"]"#))
        .filter_map(|a| a.attr("title"))
        .map(title_case)
        .filter(|title| title != NO_CAPE_PLACEHOLDER);
    optifine.into_iter().chain(linked).map(Into::into).collect()
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut res = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word {
            res.extend(c.to_lowercase());
        } else {
            res.extend(c.to_uppercase());
        }
        in_word = c.is_alphabetic();
    }
    res
}

fn parse_count(s: &str) -> Option<u64> {
    s.replace(',', "").parse().ok()
}
