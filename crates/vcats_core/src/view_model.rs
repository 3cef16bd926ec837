use crate::{Cat, CatId};

pub const APP_TITLE: &str = "VirtualCats 🐾";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub cards: Vec<CatCardView>,
    pub dirty: bool,
}

/// One card. Both controls target `cat_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatCardView {
    pub cat_id: CatId,
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
    pub birthday: String,
    pub sex: String,
    pub feed_count: u32,
}

impl CatCardView {
    pub(crate) fn new(cat: &Cat, base: &str) -> Self {
        Self {
            cat_id: cat.id,
            image_src: format!("{base}{}", cat.image_url),
            image_alt: format!("Picture: {}", cat.name),
            name: cat.name.clone(),
            birthday: cat.birthday.clone(),
            sex: cat.sex.clone(),
            feed_count: cat.feed_count.unwrap_or(0),
        }
    }
}
