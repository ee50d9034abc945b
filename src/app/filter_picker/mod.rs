// SPDX-License-Identifier: GPL-3.0-only

//! Filter picker
//!
//! Grid of the filter catalog, one section per collection, shown in the
//! context drawer. The presenter is built from the persisted selection and
//! hands back a [`FilterSelected`] for every tap; persisting the choice and
//! closing the drawer is up to the caller.

mod view;

use crate::app::cell::FilterCellState;
use crate::filters::{FilterCollection, FilterName};

/// Outcome of tapping a filter cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelected {
    pub filter: FilterName,
}

/// Presenter state of the filter picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterList {
    active: FilterName,
}

impl FilterList {
    pub fn new(active: FilterName) -> Self {
        Self { active }
    }

    /// Filter currently marked active
    pub fn active(&self) -> FilterName {
        self.active
    }

    /// Sections in display order
    pub fn sections(
        &self,
    ) -> impl Iterator<Item = (FilterCollection, Vec<(FilterName, FilterCellState)>)> + '_ {
        FilterCollection::ALL.into_iter().map(|collection| {
            let cells = collection
                .filters()
                .iter()
                .map(|name| (*name, FilterCellState::new(*name == self.active)))
                .collect();
            (collection, cells)
        })
    }

    /// Mark `filter` active and report the selection
    pub fn select(&mut self, filter: FilterName) -> FilterSelected {
        self.active = filter;
        FilterSelected { filter }
    }
}
