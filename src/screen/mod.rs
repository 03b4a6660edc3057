//! Framework-free list screen model.
//!
//! State is separated from rendering in the reducer/view-model style: a
//! [`ScreenState`] holds the raw data, [`reduce`] applies actions as pure
//! transitions emitting fetch [`Effect`]s, and [`compute_view_model`]
//! produces everything a renderer needs. Rendering itself is an external
//! concern.

pub mod filter_panel;
pub mod model;
pub mod notice;

pub use filter_panel::{FilterPanelState, PanelFacet};
pub use model::{
    Effect, FacetViewModel, OptionViewModel, PanelViewModel, ScreenAction, ScreenState,
    ScreenViewModel, compute_view_model, reduce,
};
pub use notice::{Notice, NoticeLevel};
