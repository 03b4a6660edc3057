//! Filter panel state for list screens.
//!
//! The panel shows one multi-select option list per facet, derived from the
//! snapshot. Long option lists can be narrowed with a fuzzy query.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::controller::ListController;
use crate::error::Result;
use crate::types::FacetOption;

/// One facet's derived option list.
#[derive(Debug, Clone)]
pub struct PanelFacet {
    pub key: String,
    pub options: Vec<FacetOption>,
}

/// Filter panel state
#[derive(Debug, Clone, Default)]
pub struct FilterPanelState {
    /// Facets in configuration order with their derived options
    pub facets: Vec<PanelFacet>,
    /// Current focused facet index
    pub focused_facet: usize,
    /// Fuzzy query narrowing the focused facet's options
    pub narrow: String,
}

impl FilterPanelState {
    /// Build panel contents from the controller's current snapshot. The
    /// option lists may be partial until the full snapshot arrives; callers
    /// rebuild on [`FilterPanelState::refresh_options`].
    pub fn from_controller<R: Clone>(controller: &ListController<R>) -> Result<Self> {
        let mut facets = Vec::new();
        for facet in &controller.config().facets {
            facets.push(PanelFacet {
                key: facet.key.to_string(),
                options: controller.facet_options(facet.key)?,
            });
        }
        Ok(Self {
            facets,
            focused_facet: 0,
            narrow: String::new(),
        })
    }

    /// Re-derive option lists, keeping focus and the narrow query. Used when
    /// a snapshot arrives while the panel is open.
    pub fn refresh_options<R: Clone>(&mut self, controller: &ListController<R>) -> Result<()> {
        let focused = self.focused_facet;
        let narrow = std::mem::take(&mut self.narrow);
        *self = Self::from_controller(controller)?;
        self.focused_facet = focused.min(self.facets.len().saturating_sub(1));
        self.narrow = narrow;
        Ok(())
    }

    /// Move focus to the next facet
    pub fn focus_next(&mut self) {
        if !self.facets.is_empty() {
            self.focused_facet = (self.focused_facet + 1) % self.facets.len();
        }
    }

    /// Move focus to the previous facet
    pub fn focus_prev(&mut self) {
        if !self.facets.is_empty() {
            self.focused_facet = self
                .focused_facet
                .checked_sub(1)
                .unwrap_or(self.facets.len() - 1);
        }
    }

    pub fn focused(&self) -> Option<&PanelFacet> {
        self.facets.get(self.focused_facet)
    }

    /// Options of the focused facet, narrowed by the fuzzy query. With an
    /// empty query the full list comes back in derived order; otherwise
    /// matches are ranked by score.
    pub fn narrowed_options(&self) -> Vec<FacetOption> {
        let Some(facet) = self.focused() else {
            return Vec::new();
        };
        if self.narrow.is_empty() {
            return facet.options.clone();
        }

        let matcher = SkimMatcherV2::default().smart_case();
        let mut scored: Vec<(i64, FacetOption)> = facet
            .options
            .iter()
            .filter_map(|option| {
                matcher
                    .fuzzy_match(&option.label, &self.narrow)
                    .map(|score| (score, option.clone()))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.into_iter().map(|(_, option)| option).collect()
    }
}
