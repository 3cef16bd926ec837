use crate::{AppState, Effect, Msg, Rejection};

pub const FEED_FALLBACK_MESSAGE: &str = "Feeding failed!";
pub const REMOVE_FALLBACK_MESSAGE: &str = "Removal failed!";

/// Pure update function: applies a message to state and returns any effects.
///
/// Local data only changes after the server has confirmed a mutation; a
/// rejected request alerts and leaves the cached list untouched.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.begin_load() {
                // First draw shows the empty page while the list loads.
                state.mark_dirty();
                vec![Effect::LoadCats]
            } else {
                Vec::new()
            }
        }
        Msg::CatsLoaded(Ok(cats)) => {
            state.replace_cats(cats);
            Vec::new()
        }
        Msg::CatsLoaded(Err(reason)) => {
            vec![Effect::Diagnostic(format!("Error fetching cats: {reason}"))]
        }
        Msg::FeedClicked { cat_id } => {
            if state.contains(cat_id) {
                vec![Effect::FeedCat { cat_id }]
            } else {
                Vec::new()
            }
        }
        Msg::FeedDone { cat_id, result } => match result {
            Ok(message) => {
                state.apply_fed(cat_id);
                vec![Effect::Alert(message)]
            }
            Err(rejection) => vec![rejection_alert(rejection, FEED_FALLBACK_MESSAGE)],
        },
        Msg::DeleteClicked { cat_id } => {
            if state.contains(cat_id) {
                vec![Effect::DeleteCat { cat_id }]
            } else {
                Vec::new()
            }
        }
        Msg::DeleteDone { cat_id, result } => match result {
            Ok(message) => {
                state.apply_removed(cat_id);
                vec![Effect::Alert(message)]
            }
            Err(rejection) => vec![rejection_alert(rejection, REMOVE_FALLBACK_MESSAGE)],
        },
        Msg::RedrawRequested => {
            state.mark_dirty();
            Vec::new()
        }
    };

    (state, effects)
}

fn rejection_alert(rejection: Rejection, fallback: &str) -> Effect {
    let text = rejection
        .detail
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| fallback.to_string());
    Effect::Alert(text)
}
