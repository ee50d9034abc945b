// SPDX-License-Identifier: GPL-3.0-only

//! Effects panel
//!
//! One toggle cell per effect. Unlike the filter picker any number of cells
//! can be ON at once.

mod view;

use crate::app::cell::FilterCellState;
use crate::filters::FxName;

/// Outcome of tapping an effect cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectToggled {
    pub fx: FxName,
    pub enabled: bool,
}

/// Presenter state of the effects panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectsPanel {
    cells: Vec<(FxName, FilterCellState)>,
}

impl EffectsPanel {
    /// Build the panel with the persisted effects switched on
    pub fn new(enabled: &[FxName]) -> Self {
        let cells = FxName::ALL
            .into_iter()
            .map(|fx| (fx, FilterCellState::new(enabled.contains(&fx))))
            .collect();
        Self { cells }
    }

    /// Cells in display order
    pub fn cells(&self) -> &[(FxName, FilterCellState)] {
        &self.cells
    }

    /// Effects currently ON, in declaration order
    pub fn enabled(&self) -> Vec<FxName> {
        self.cells
            .iter()
            .filter(|(_, state)| state.is_selected())
            .map(|(fx, _)| *fx)
            .collect()
    }

    /// Flip one effect
    pub fn toggle(&mut self, fx: FxName) -> EffectToggled {
        let mut enabled = false;
        if let Some((_, state)) = self.cells.iter_mut().find(|(name, _)| *name == fx) {
            state.toggle();
            enabled = state.is_selected();
        }
        EffectToggled { fx, enabled }
    }

    /// Switch every effect off, reporting the ones that changed
    pub fn clear(&mut self) -> Vec<EffectToggled> {
        let mut changed = Vec::new();
        for (fx, state) in &mut self.cells {
            if state.is_selected() {
                state.reset();
                changed.push(EffectToggled {
                    fx: *fx,
                    enabled: false,
                });
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_reflects_persisted_effects() {
        let panel = EffectsPanel::new(&[FxName::Grain]);
        assert_eq!(panel.enabled(), vec![FxName::Grain]);
        assert_eq!(panel.cells().len(), FxName::ALL.len());
    }

    #[test]
    fn test_toggle_twice_restores_panel() {
        let original = EffectsPanel::new(&[]);
        let mut panel = original.clone();

        let on = panel.toggle(FxName::LightLeaks);
        assert_eq!(
            on,
            EffectToggled {
                fx: FxName::LightLeaks,
                enabled: true
            }
        );
        assert_eq!(panel.enabled(), vec![FxName::LightLeaks]);

        let off = panel.toggle(FxName::LightLeaks);
        assert!(!off.enabled);
        assert_eq!(panel, original);
    }

    #[test]
    fn test_effects_toggle_independently() {
        let mut panel = EffectsPanel::new(&[]);
        panel.toggle(FxName::Grain);
        panel.toggle(FxName::LightLeaks);
        assert_eq!(panel.enabled(), vec![FxName::LightLeaks, FxName::Grain]);
    }

    #[test]
    fn test_clear_reports_only_changed_cells() {
        let mut panel = EffectsPanel::new(&[FxName::Grain]);
        let changed = panel.clear();
        assert_eq!(
            changed,
            vec![EffectToggled {
                fx: FxName::Grain,
                enabled: false
            }]
        );
        assert!(panel.enabled().is_empty());
        assert!(panel.clear().is_empty());
    }
}
