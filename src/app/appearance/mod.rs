// SPDX-License-Identifier: GPL-3.0-only

//! Appearance page
//!
//! Lists System, Light and Dark with a checkmark on the active choice.
//! Selecting returns an [`AppearanceChange`]; the caller persists the value
//! and applies the theme.

mod view;

use crate::config::AppTheme;

/// Outcome of tapping an appearance row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceChange {
    pub theme: AppTheme,
    /// False when the row was already checked
    pub changed: bool,
}

/// Presenter state of the appearance page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppearanceList {
    current: AppTheme,
}

impl AppearanceList {
    pub fn new(current: AppTheme) -> Self {
        Self { current }
    }

    /// Rows in display order
    pub fn options(&self) -> [AppTheme; 3] {
        AppTheme::ALL
    }

    pub fn current(&self) -> AppTheme {
        self.current
    }

    /// Whether the row for `theme` carries the checkmark
    pub fn is_checked(&self, theme: AppTheme) -> bool {
        self.current == theme
    }

    /// Check `theme`
    pub fn select(&mut self, theme: AppTheme) -> AppearanceChange {
        let changed = self.current != theme;
        self.current = theme;
        AppearanceChange { theme, changed }
    }
}
