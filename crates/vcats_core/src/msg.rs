use crate::{Cat, CatId};

/// What the core sees of a rejected mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rejection {
    /// Server-supplied explanation, if the error reply carried one.
    pub detail: Option<String>,
}

impl Rejection {
    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was shown for the first time.
    Mounted,
    /// Completion of the initial collection read.
    CatsLoaded(Result<Vec<Cat>, String>),
    /// User pressed the feed control on a card.
    FeedClicked { cat_id: CatId },
    /// Completion of a feed request; `Ok` carries the server message.
    FeedDone {
        cat_id: CatId,
        result: Result<String, Rejection>,
    },
    /// User pressed the delete control on a card.
    DeleteClicked { cat_id: CatId },
    /// Completion of a delete request; `Ok` carries the server message.
    DeleteDone {
        cat_id: CatId,
        result: Result<String, Rejection>,
    },
    /// User asked for the list to be drawn again.
    RedrawRequested,
}
