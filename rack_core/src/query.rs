//! Filtered, faceted and paginated views over the rack registry.
//!
//! Views are recomputed from the current collection on every call and never
//! cached. Out-of-range page numbers are clamped to the nearest valid page.

use crate::favorites::FavoriteIndex;
use crate::model::Rack;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Range;

pub const PAGE_SIZE: usize = 50;

/// Label of the "no district filter" facet.
pub const ALL_DISTRICTS: &str = "전체";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DistrictFilter {
    #[default]
    All,
    Named(String),
}

impl DistrictFilter {
    /// Empty input and the `전체` label both mean no filter.
    pub fn parse(label: &str) -> Self {
        if label.is_empty() || label == ALL_DISTRICTS {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_DISTRICTS,
            Self::Named(name) => name,
        }
    }

    pub fn admits(&self, district: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => district.contains(name.as_str()),
        }
    }
}

impl Serialize for DistrictFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DistrictFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::parse(&label))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RackQuery {
    pub text: String,
    pub district: DistrictFilter,
}

impl RackQuery {
    pub fn new(text: impl Into<String>, district: DistrictFilter) -> Self {
        Self {
            text: text.into(),
            district,
        }
    }

    /// Case-sensitive substring match on name or district, then the district
    /// filter.
    pub fn matches(&self, rack: &Rack) -> bool {
        let details = &rack.details;
        let text = self.text.as_str();
        (details.name.contains(text) || details.district.contains(text))
            && self.district.admits(&details.district)
    }
}

/// District facets: the sentinel first, then every distinct non-empty district
/// in Korean collation order.
pub fn district_facets(racks: &[Rack]) -> Vec<DistrictFilter> {
    let mut districts: Vec<&str> = racks
        .iter()
        .map(|rack| rack.details.district.as_str())
        .filter(|district| !district.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    districts.sort_by(|a, b| korean_order(a, b));

    std::iter::once(DistrictFilter::All)
        .chain(districts.into_iter().map(|d| DistrictFilter::Named(d.to_string())))
        .collect()
}

/// Approximates the Korean locale collation. Precomposed Hangul syllables are
/// already laid out in dictionary order, so code point order is right for them;
/// Latin letters compare case-insensitively first, with case as a tiebreaker.
pub fn korean_order(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| a.cmp(b))
}

pub fn filter<'a>(racks: &'a [Rack], query: &RackQuery) -> Vec<&'a Rack> {
    racks.iter().filter(|rack| query.matches(rack)).collect()
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page actually served.
    pub page: usize,
    pub page_count: usize,
    /// Number of racks matching the query across all pages.
    pub total: usize,
}

impl Pagination {
    /// Clamps `requested` into `1..=page_count`. An empty result still has a
    /// (blank) page 1.
    pub fn new(total: usize, requested: usize) -> Self {
        let page_count = page_count(total);
        Self {
            page: requested.clamp(1, page_count.max(1)),
            page_count,
            total,
        }
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * PAGE_SIZE).min(self.total);
        let end = (self.page * PAGE_SIZE).min(self.total);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedRack<'a> {
    #[serde(flatten)]
    pub rack: &'a Rack,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RackPage<'a> {
    pub items: Vec<ListedRack<'a>>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Filters `racks`, serves one page of the result and flags favorites on it.
pub fn run<'a>(
    racks: &'a [Rack],
    favorites: &FavoriteIndex,
    query: &RackQuery,
    page: usize,
) -> RackPage<'a> {
    let matched = filter(racks, query);
    let pagination = Pagination::new(matched.len(), page);
    let items = matched[pagination.range()]
        .iter()
        .map(|&rack| ListedRack {
            rack,
            is_favorite: favorites.contains(&rack.id),
        })
        .collect();

    RackPage { items, pagination }
}
