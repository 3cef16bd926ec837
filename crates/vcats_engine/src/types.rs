use std::fmt;

use serde::Deserialize;

pub type CatId = i64;

/// A cat as returned by `GET /cats`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatRecord {
    pub id: CatId,
    pub name: String,
    pub sex: String,
    pub birthday: String,
    pub image_url: String,
    #[serde(default)]
    pub feed: bool,
    #[serde(default)]
    pub feed_count: Option<u32>,
}

/// Body of a successful feed or delete call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MutationReply {
    /// Human-readable text from the `message` field, when it is a string.
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CatsLoaded(Result<Vec<CatRecord>, ApiError>),
    FeedCompleted {
        cat_id: CatId,
        result: Result<MutationReply, ApiError>,
    },
    DeleteCompleted {
        cat_id: CatId,
        result: Result<MutationReply, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
    /// The `detail` field of an error reply, when it is a string.
    pub detail: Option<String>,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
