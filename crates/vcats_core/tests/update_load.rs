mod common;

use common::{cat, init_logging, loaded, BASE_URL};
use pretty_assertions::assert_eq;
use vcats_core::{update, AppState, Effect, Msg};

#[test]
fn mount_requests_the_collection_once() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Mounted);
    assert_eq!(effects, vec![Effect::LoadCats]);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::Mounted);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn load_replaces_list_in_server_order() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let cats = vec![cat(7, "Xiaobao"), cat(2, "Xiaoguai"), cat(5, "Mimi")];

    let (mut state, effects) = update(state, Msg::CatsLoaded(Ok(cats)));

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let ids: Vec<_> = state.view(BASE_URL).cards.iter().map(|c| c.cat_id).collect();
    assert_eq!(ids, vec![7, 2, 5]);
}

#[test]
fn load_failure_is_diagnostic_only() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::Mounted);
    state.consume_dirty();

    let (mut state, effects) = update(state, Msg::CatsLoaded(Err("network error".to_string())));

    assert_eq!(
        effects,
        vec![Effect::Diagnostic(
            "Error fetching cats: network error".to_string()
        )]
    );
    assert!(!effects.iter().any(|e| matches!(e, Effect::Alert(_))));
    assert!(state.cats().is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn view_prefixes_image_with_base_origin() {
    init_logging();
    let state = loaded(vec![cat(1, "Xiaoguai")]);

    let view = state.view("http://127.0.0.1:8000/");
    let card = &view.cards[0];

    assert_eq!(card.image_src, "http://127.0.0.1:8000/static/xiaoguai.jpg");
    assert_eq!(card.image_alt, "Picture: Xiaoguai");
    assert_eq!(card.name, "Xiaoguai");
    assert_eq!(card.birthday, "2023-03-26");
    assert_eq!(card.sex, "Female");
    assert_eq!(card.feed_count, 0);
}

#[test]
fn missing_feed_count_is_shown_as_zero() {
    init_logging();
    let mut stray = cat(3, "Stray");
    stray.feed_count = None;
    let state = loaded(vec![stray]);

    assert_eq!(state.view(BASE_URL).cards[0].feed_count, 0);
}

#[test]
fn redraw_marks_dirty_without_touching_data() {
    init_logging();
    let state = loaded(vec![cat(1, "Xiaoguai")]);
    let before = state.cats().to_vec();

    let (mut state, effects) = update(state, Msg::RedrawRequested);

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    assert_eq!(state.cats(), before.as_slice());
}
