// SPDX-License-Identifier: GPL-3.0-only

//! Filter catalog
//!
//! The fixed set of colour filters and the collections they are shown in.

use crate::errors::UnknownFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour filter identifier
///
/// Ordered by declaration. Persisted and parsed in lowercase (`"a1"`),
/// displayed in uppercase (`"A1"`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterName {
    #[default]
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    B1,
    B2,
}

impl FilterName {
    /// Every filter, in declaration order
    pub const ALL: [FilterName; 8] = [
        FilterName::A1,
        FilterName::A2,
        FilterName::A3,
        FilterName::A4,
        FilterName::A5,
        FilterName::A6,
        FilterName::B1,
        FilterName::B2,
    ];

    /// Persisted identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterName::A1 => "a1",
            FilterName::A2 => "a2",
            FilterName::A3 => "a3",
            FilterName::A4 => "a4",
            FilterName::A5 => "a5",
            FilterName::A6 => "a6",
            FilterName::B1 => "b1",
            FilterName::B2 => "b2",
        }
    }

    /// Label shown on the filter cell
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Collection this filter is listed under
    pub fn collection(&self) -> FilterCollection {
        match self {
            FilterName::A1
            | FilterName::A2
            | FilterName::A3
            | FilterName::A4
            | FilterName::A5
            | FilterName::A6 => FilterCollection::A,
            FilterName::B1 | FilterName::B2 => FilterCollection::B,
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FilterName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Display group of filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCollection {
    A,
    B,
}

impl FilterCollection {
    /// Collections in display order
    pub const ALL: [FilterCollection; 2] = [FilterCollection::A, FilterCollection::B];

    /// Section header
    pub fn title(&self) -> &'static str {
        match self {
            FilterCollection::A => "A Collection",
            FilterCollection::B => "B Collection",
        }
    }

    /// Members of this collection in display order
    pub fn filters(&self) -> &'static [FilterName] {
        match self {
            FilterCollection::A => &[
                FilterName::A1,
                FilterName::A2,
                FilterName::A3,
                FilterName::A4,
                FilterName::A5,
                FilterName::A6,
            ],
            FilterCollection::B => &[FilterName::B1, FilterName::B2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_filter_in_exactly_one_collection() {
        for name in FilterName::ALL {
            let owners: Vec<_> = FilterCollection::ALL
                .iter()
                .filter(|c| c.filters().contains(&name))
                .collect();
            assert_eq!(owners, vec![&name.collection()], "{name} owners");
        }
    }

    #[test]
    fn test_collections_cover_catalog_in_order() {
        let flattened: Vec<FilterName> = FilterCollection::ALL
            .iter()
            .flat_map(|c| c.filters().iter().copied())
            .collect();
        assert_eq!(flattened, FilterName::ALL.to_vec());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("b1".parse::<FilterName>(), Ok(FilterName::B1));
        assert_eq!("A6".parse::<FilterName>(), Ok(FilterName::A6));
        assert_eq!(
            "c3".parse::<FilterName>(),
            Err(UnknownFilter("c3".to_string()))
        );
    }

    #[test]
    fn test_declaration_order() {
        assert!(FilterName::A1 < FilterName::A6);
        assert!(FilterName::A6 < FilterName::B1);
    }
}
