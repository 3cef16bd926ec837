use std::sync::Arc;

use crate::view_model::{AppViewModel, CatCardView};
use crate::{Cat, CatId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    cats: Vec<Arc<Cat>>,
    load_requested: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the card list; image sources are `base_url` + each relative path.
    pub fn view(&self, base_url: &str) -> AppViewModel {
        let base = base_url.trim_end_matches('/');
        AppViewModel {
            cards: self
                .cats
                .iter()
                .map(|cat| CatCardView::new(cat, base))
                .collect(),
            dirty: self.dirty,
        }
    }

    pub fn cats(&self) -> &[Arc<Cat>] {
        &self.cats
    }

    pub fn contains(&self, cat_id: CatId) -> bool {
        self.cats.iter().any(|cat| cat.id == cat_id)
    }

    /// Returns true only the first time; the collection is read once per session.
    pub(crate) fn begin_load(&mut self) -> bool {
        !std::mem::replace(&mut self.load_requested, true)
    }

    pub(crate) fn replace_cats(&mut self, cats: Vec<Cat>) {
        self.cats = cats.into_iter().map(Arc::new).collect();
        self.dirty = true;
    }

    /// Marks the matching cat as fed. Other entries keep their `Arc` identity.
    pub(crate) fn apply_fed(&mut self, cat_id: CatId) {
        if !self.contains(cat_id) {
            return;
        }
        self.cats = self
            .cats
            .iter()
            .map(|cat| {
                if cat.id == cat_id {
                    Arc::new(cat.fed())
                } else {
                    Arc::clone(cat)
                }
            })
            .collect();
        self.dirty = true;
    }

    pub(crate) fn apply_removed(&mut self, cat_id: CatId) {
        if !self.contains(cat_id) {
            return;
        }
        self.cats = self
            .cats
            .iter()
            .filter(|cat| cat.id != cat_id)
            .cloned()
            .collect();
        self.dirty = true;
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
