//! Text2List core: the entry pipeline, the form state machine and its view models.
mod config;
mod controller;
mod effect;
mod msg;
pub mod pipeline;
mod state;
mod update;
mod view_model;

pub use config::{
    ConfigError, DisplayText, EntryValidator, FormConfig, FormSettings, Separators,
    DEFAULT_MAX_VISIBLE_ITEMS, DEFAULT_SEPARATORS,
};
pub use controller::Text2ListController;
pub use effect::Effect;
pub use msg::Msg;
pub use pipeline::{
    AbortReason, MaxItemsCheck, Outcome, PipelineConfig, PipelineReport, PipelineResult,
};
pub use state::{Feedback, FormState, ValidationFeedback};
pub use update::update;
pub use view_model::{
    EntryListView, EntryRowView, FeedbackKind, FeedbackMessage, FormViewModel,
};
