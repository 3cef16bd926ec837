#![allow(dead_code)]

use std::sync::Once;

use vcats_core::{update, AppState, Cat, CatId, Msg};

pub const BASE_URL: &str = "http://127.0.0.1:8000";

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(vcats_logging::initialize_for_tests);
}

pub fn cat(id: CatId, name: &str) -> Cat {
    Cat {
        id,
        name: name.to_string(),
        sex: "Female".to_string(),
        birthday: "2023-03-26".to_string(),
        image_url: format!("/static/{}.jpg", name.to_lowercase()),
        feed: false,
        feed_count: Some(0),
    }
}

/// State after mount and a successful initial load.
pub fn loaded(cats: Vec<Cat>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (mut state, _) = update(state, Msg::CatsLoaded(Ok(cats)));
    state.consume_dirty();
    state
}
