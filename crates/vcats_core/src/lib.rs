//! VirtualCats core: pure state machine and view-model helpers.
mod cat;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use cat::{Cat, CatId};
pub use effect::Effect;
pub use msg::{Msg, Rejection};
pub use state::AppState;
pub use update::{update, FEED_FALLBACK_MESSAGE, REMOVE_FALLBACK_MESSAGE};
pub use view_model::{AppViewModel, CatCardView, APP_TITLE};
