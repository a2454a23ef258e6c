use scraper::Html;
use strum::{EnumIter, IntoEnumIterator};

use super::{parser, CapeName, PastName, ProfileUuid, ServerSlug};

/// One field of a profile page, each bound to its own extractor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumIter, strum::Display)]
pub enum Field {
    Uuid,
    MonthlyViews,
    Followers,
    PastNames,
    FavoriteServers,
    Capes,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FieldValue {
    Uuid(Option<ProfileUuid>),
    MonthlyViews(Option<u64>),
    Followers(Option<u64>),
    PastNames(Vec<PastName>),
    FavoriteServers(Vec<ServerSlug>),
    Capes(Vec<CapeName>),
}

impl Field {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn extract(self, html: &Html) -> FieldValue {
        match self {
            Field::Uuid => FieldValue::Uuid(parser::uuid(html)),
            Field::MonthlyViews => FieldValue::MonthlyViews(parser::monthly_views(html)),
            Field::Followers => FieldValue::Followers(parser::followers(html)),
            Field::PastNames => FieldValue::PastNames(parser::past_names(html)),
            Field::FavoriteServers => FieldValue::FavoriteServers(parser::favorite_servers(html)),
            Field::Capes => FieldValue::Capes(parser::capes(html)),
        }
    }
}

impl FieldValue {
    pub fn field(&self) -> Field {
        match self {
            FieldValue::Uuid(_) => Field::Uuid,
            FieldValue::MonthlyViews(_) => Field::MonthlyViews,
            FieldValue::Followers(_) => Field::Followers,
            FieldValue::PastNames(_) => Field::PastNames,
            FieldValue::FavoriteServers(_) => Field::FavoriteServers,
            FieldValue::Capes(_) => Field::Capes,
        }
    }

    /// Whether the extractor came back empty-handed.
    pub fn is_absent(&self) -> bool {
        match self {
            FieldValue::Uuid(x) => x.is_none(),
            FieldValue::MonthlyViews(x) | FieldValue::Followers(x) => x.is_none(),
            FieldValue::PastNames(_) | FieldValue::FavoriteServers(_) | FieldValue::Capes(_) => {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use scraper::Html;

    use super::{Field, FieldValue};

    #[test]
    fn every_field_extracts_its_own_value() {
        let html = Html::parse_document("<html></html>");
        let fields = Field::all().collect_vec();
        assert_eq!(fields.len(), 6);
        for field in fields {
            assert_eq!(field.extract(&html).field(), field);
        }
    }

    #[test]
    fn empty_lists_are_not_absent() {
        let html = Html::parse_document("<html></html>");
        assert!(Field::Followers.extract(&html).is_absent());
        assert!(Field::Uuid.extract(&html).is_absent());
        let capes = Field::Capes.extract(&html);
        assert_eq!(capes, FieldValue::Capes(vec![]));
        assert!(!capes.is_absent());
    }
}
