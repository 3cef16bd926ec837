use crate::CatId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the full cat collection.
    LoadCats,
    FeedCat { cat_id: CatId },
    DeleteCat { cat_id: CatId },
    /// Show a message to the user before the next render.
    Alert(String),
    /// Operator-only report; never shown to the user.
    Diagnostic(String),
}
