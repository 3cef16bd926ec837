pub type CatId = i64;

/// A cat record as cached by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub id: CatId,
    pub name: String,
    pub sex: String,
    pub birthday: String,
    /// Path relative to the API origin, e.g. `/static/xiaobao.jpg`.
    pub image_url: String,
    pub feed: bool,
    /// `None` when the server omitted the count.
    pub feed_count: Option<u32>,
}

impl Cat {
    /// Copy of this cat after one successful feed.
    pub(crate) fn fed(&self) -> Self {
        Self {
            feed: true,
            feed_count: Some(self.feed_count.unwrap_or(0).saturating_add(1)),
            ..self.clone()
        }
    }
}
