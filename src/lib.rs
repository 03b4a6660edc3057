pub mod commands;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod records;
pub mod remote;
pub mod screen;
pub mod session;
pub mod types;

pub use config::Config;
pub use controller::{
    ActiveFilterSet, ApplyOutcome, DateRange, DisplayMode, FacetConfig, FetchTicket, ListConfig,
    ListController, PageWindow, SEARCH_DEBOUNCE, SearchDebouncer, SearchDispatch, SnapshotCache,
    SortPolicy,
};
pub use error::{HiretrackError, Result};
pub use records::{
    Candidate, Interview, JobOpening, JobRequest, ListRecord, Referral, UserRecord,
};
pub use remote::{
    EntityClient, MasterDataCache, OptionsSource, PageRequest, PageResponse, RecordSource,
    RestClient,
};
pub use screen::{
    Effect, Notice, NoticeLevel, ScreenAction, ScreenState, ScreenViewModel, compute_view_model,
    reduce,
};
pub use session::SessionContext;
pub use types::{ALL_ENTITIES, EntityKind, FacetOption, Id, OptionValue};
