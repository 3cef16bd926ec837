//! VirtualCats engine: HTTP client for the cats API and effect execution.
mod api;
mod engine;
mod types;

pub use api::{ApiSettings, CatApi, ReqwestCatApi, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use types::{ApiError, CatId, CatRecord, EngineEvent, FailureKind, MutationReply};
